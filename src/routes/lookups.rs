use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::lookups::Dropdown,
    error::AppResult,
    response::{ApiResponse, Meta},
    services::lookup_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lookups/{category}", get(lookup_by_category))
        .route("/product-types", get(product_types))
        .route("/units/active", get(active_units))
}

#[utoipa::path(
    get,
    path = "/api/lookups/{category}",
    params(
        ("category" = String, Path, description = "Lookup category, e.g. STATUS")
    ),
    responses(
        (status = 200, description = "Code to description options", body = ApiResponse<Dropdown>)
    ),
    tag = "Lookups"
)]
pub async fn lookup_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ApiResponse<Dropdown>>> {
    let options = lookup_service::find_by_category(&state.orm, &category).await?;
    let meta = Meta::with_total(options.len());
    Ok(Json(ApiResponse::success("Lookups", options, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/product-types",
    responses(
        (status = 200, description = "Product type options", body = ApiResponse<Dropdown>)
    ),
    tag = "Lookups"
)]
pub async fn product_types(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Dropdown>>> {
    let options = lookup_service::product_type_options(&state.orm).await?;
    let meta = Meta::with_total(options.len());
    Ok(Json(ApiResponse::success("Product types", options, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/units/active",
    responses(
        (status = 200, description = "Active unit options", body = ApiResponse<Dropdown>)
    ),
    tag = "Lookups"
)]
pub async fn active_units(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Dropdown>>> {
    let options = lookup_service::active_unit_options(&state.orm).await?;
    let meta = Meta::with_total(options.len());
    Ok(Json(ApiResponse::success("Units", options, Some(meta))))
}
