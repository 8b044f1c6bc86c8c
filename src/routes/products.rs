use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::products::{EditProductForm, ProductForm, ProductFormOptions, ProductList},
    error::AppResult,
    middleware::{auth::AuthUser, locale::RequestLocale},
    models::ProductDetail,
    response::ApiResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/create", get(create_form))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/edit", get(edit_form))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (
            status = 200,
            description = "Get product with its units and categories",
            body = ApiResponse<ProductDetail>
        ),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductDetail>>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/create",
    responses(
        (
            status = 200,
            description = "Dropdown data for the create form",
            body = ApiResponse<ProductFormOptions>
        )
    ),
    tag = "Products"
)]
pub async fn create_form(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductFormOptions>>> {
    let resp = product_service::create_form(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/edit",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (
            status = 200,
            description = "Product and dropdown data for the edit form",
            body = ApiResponse<EditProductForm>
        ),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<EditProductForm>>> {
    let resp = product_service::edit_form(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductForm,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<ProductDetail>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    RequestLocale(locale): RequestLocale,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductDetail>>)> {
    let form = product_service::decode_form(&state.translator, locale, payload)?;
    let resp = product_service::create_product(&state, &user, locale, form).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductForm,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i32>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<ProductDetail>>> {
    let form = product_service::decode_form(&state.translator, locale, payload)?;
    let resp = product_service::update_product(&state, &user, locale, id, form).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product with its units and categories"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = product_service::delete_product(&state, &user, id).await?;
    Ok(Json(resp))
}
