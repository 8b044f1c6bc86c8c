use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub store_id: i32,
    pub product_type_id: i32,
    pub name: String,
    pub short_code: Option<String>,
    pub barcode: Option<String>,
    pub minimal_in_stock: Option<i32>,
    pub description: Option<String>,
    pub status: String,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductUnit {
    pub id: i32,
    pub product_id: i32,
    pub unit_id: i32,
    pub is_base: bool,
    pub conversion_value: f64,
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCategory {
    pub id: i32,
    pub product_id: i32,
    pub store_id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub level: i32,
}

/// A product together with its unit and category lines.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub units: Vec<ProductUnit>,
    pub categories: Vec<ProductCategory>,
}
