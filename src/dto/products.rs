use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::lookups::Dropdown,
    models::{Product, ProductDetail},
};

/// Which write path a [`ProductForm`] is submitted to; update is stricter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductForm {
    #[serde(rename = "type", default, deserialize_with = "form_number")]
    #[validate(required)]
    pub product_type_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required, length(max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 255))]
    pub short_code: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 255))]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "form_number")]
    #[validate(range(min = 0))]
    pub minimal_in_stock: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required, length(max = 255))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub remarks: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub units: Vec<UnitLine>,
    #[serde(default)]
    #[validate(nested)]
    pub categories: Vec<CategoryLine>,
}

/// One row of the unit grid. Numbers may arrive as strings from form posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UnitLine {
    #[serde(default, deserialize_with = "form_number")]
    #[validate(required)]
    pub unit_id: Option<i32>,
    #[serde(default, deserialize_with = "form_bool")]
    pub is_base: bool,
    #[serde(default, deserialize_with = "form_number")]
    #[validate(required, range(exclusive_min = 0.0))]
    pub conversion_value: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryLine {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required, length(max = 255))]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required, length(max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "form_number")]
    #[validate(required, range(min = 0))]
    pub level: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductFormOptions {
    pub statuses: Dropdown,
    pub product_types: Dropdown,
    pub units: Dropdown,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditProductForm {
    pub product: ProductDetail,
    pub selected_type: i32,
    pub options: ProductFormOptions,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// A JSON number or a numeric string; blank strings count as absent.
fn form_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}

/// Checkbox-style flag: a JSON bool, or a string that is true only when it reads `"true"`.
fn form_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Text(s)) => s == "true",
        None => false,
    })
}
