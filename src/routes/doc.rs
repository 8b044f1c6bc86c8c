use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        lookups::{Dropdown, DropdownOption},
        products::{
            CategoryLine, EditProductForm, ProductForm, ProductFormOptions, ProductList, UnitLine,
        },
        reports::CustomerReportQuery,
    },
    models::{Product, ProductCategory, ProductDetail, ProductUnit},
    response::{ApiResponse, Meta},
    routes::{health, lookups, products as product_routes, reports},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        product_routes::list_products,
        product_routes::create_form,
        product_routes::create_product,
        product_routes::get_product,
        product_routes::edit_form,
        product_routes::update_product,
        product_routes::delete_product,
        lookups::lookup_by_category,
        lookups::product_types,
        lookups::active_units,
        reports::customer_report
    ),
    components(
        schemas(
            Product,
            ProductUnit,
            ProductCategory,
            ProductDetail,
            ProductForm,
            UnitLine,
            CategoryLine,
            ProductList,
            ProductFormOptions,
            EditProductForm,
            Dropdown,
            DropdownOption,
            CustomerReportQuery,
            Meta,
            ApiResponse<ProductDetail>,
            ApiResponse<ProductList>,
            ApiResponse<ProductFormOptions>,
            ApiResponse<EditProductForm>,
            ApiResponse<Dropdown>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product master data endpoints"),
        (name = "Lookups", description = "Dropdown data for forms"),
        (name = "Reports", description = "Printable report endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
