use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bearer token claims identifying the acting user and the store they work in.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub store_id: i32,
    pub exp: usize,
}
