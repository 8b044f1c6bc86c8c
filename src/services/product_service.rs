use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait, sea_query::LockType,
};
use validator::Validate;

use crate::{
    audit::log_audit,
    dto::{
        lookups::Dropdown,
        products::{EditProductForm, FormMode, ProductForm, ProductFormOptions, ProductList},
    },
    entity::{
        product_categories::{
            ActiveModel as CategoryActive, Column as CategoryCol, Entity as ProductCategories,
            Model as CategoryModel,
        },
        product_units::{
            ActiveModel as UnitActive, Column as UnitCol, Entity as ProductUnits,
            Model as UnitModel,
        },
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    i18n::{Locale, Translator},
    middleware::auth::AuthUser,
    models::{Product, ProductCategory, ProductDetail, ProductUnit},
    response::{ApiResponse, Meta},
    services::lookup_service::{self, STATUS_CATEGORY},
    state::AppState,
    validation::FormErrors,
};

/// Scalar fields and lines of a submission that passed validation.
#[derive(Debug)]
pub struct ValidProduct {
    pub product_type_id: i32,
    pub name: String,
    pub short_code: Option<String>,
    pub barcode: Option<String>,
    pub minimal_in_stock: Option<i32>,
    pub description: Option<String>,
    pub status: String,
    pub remarks: Option<String>,
    pub units: Vec<ValidUnit>,
    pub categories: Vec<ValidCategory>,
}

#[derive(Debug)]
pub struct ValidUnit {
    pub unit_id: i32,
    pub is_base: bool,
    pub conversion_value: f64,
    pub remarks: String,
}

#[derive(Debug)]
pub struct ValidCategory {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub level: i32,
}

/// Ids a submission may reference: exactly what the form dropdowns offer.
#[derive(Debug, Default)]
pub struct FormChoices {
    pub product_types: Dropdown,
    pub units: Dropdown,
}

impl FormChoices {
    pub async fn load<C: ConnectionTrait>(db: &C) -> AppResult<Self> {
        Ok(Self {
            product_types: lookup_service::product_type_options(db).await?,
            units: lookup_service::active_unit_options(db).await?,
        })
    }
}

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = Products::find()
        .order_by_asc(Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let meta = Meta::with_total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<ProductDetail>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let detail = load_detail(&state.orm, product).await?;
    Ok(ApiResponse::success("Product", detail, None))
}

pub async fn create_form(state: &AppState) -> AppResult<ApiResponse<ProductFormOptions>> {
    let options = form_options(&state.orm).await?;
    Ok(ApiResponse::success("Product form", options, Some(Meta::empty())))
}

pub async fn edit_form(state: &AppState, id: i32) -> AppResult<ApiResponse<EditProductForm>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let selected_type = product.product_type_id;
    let product = load_detail(&state.orm, product).await?;
    let options = form_options(&state.orm).await?;

    Ok(ApiResponse::success(
        "Product form",
        EditProductForm {
            product,
            selected_type,
            options,
        },
        Some(Meta::empty()),
    ))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    locale: Locale,
    payload: ProductForm,
) -> AppResult<ApiResponse<ProductDetail>> {
    let choices = FormChoices::load(&state.orm).await?;
    let valid = validate_form(&state.translator, locale, FormMode::Create, payload, &choices)?;

    let txn = state.orm.begin().await?;
    let now = Utc::now();

    let product = ActiveModel {
        store_id: Set(user.store_id),
        product_type_id: Set(valid.product_type_id),
        name: Set(valid.name),
        short_code: Set(valid.short_code),
        barcode: Set(valid.barcode),
        minimal_in_stock: Set(valid.minimal_in_stock),
        description: Set(valid.description),
        status: Set(valid.status),
        remarks: Set(valid.remarks),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    insert_units(&txn, product.id, &valid.units).await?;
    insert_categories(&txn, product.id, user.store_id, &valid.categories).await?;

    let detail = load_detail(&txn, product).await?;
    txn.commit().await?;

    tracing::info!(
        product_id = detail.product.id,
        units = detail.units.len(),
        categories = detail.categories.len(),
        "product created"
    );

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": detail.product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Product created",
        detail,
        Some(Meta::empty()),
    ))
}

/// Products outside the caller's store are reported as missing.
pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    locale: Locale,
    id: i32,
    payload: ProductForm,
) -> AppResult<ApiResponse<ProductDetail>> {
    let choices = FormChoices::load(&state.orm).await?;
    let valid = validate_form(&state.translator, locale, FormMode::Update, payload, &choices)?;

    let txn = state.orm.begin().await?;

    let existing = Products::find_by_id(id)
        .filter(Column::StoreId.eq(user.store_id))
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    // child lines are replaced wholesale, never diffed
    ProductUnits::delete_many()
        .filter(UnitCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    insert_units(&txn, id, &valid.units).await?;

    ProductCategories::delete_many()
        .filter(CategoryCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    insert_categories(&txn, id, user.store_id, &valid.categories).await?;

    let mut active: ActiveModel = existing.into();
    active.product_type_id = Set(valid.product_type_id);
    active.name = Set(valid.name);
    active.short_code = Set(valid.short_code);
    active.description = Set(valid.description);
    active.status = Set(valid.status);
    active.remarks = Set(valid.remarks);
    active.barcode = Set(valid.barcode);
    active.minimal_in_stock = Set(valid.minimal_in_stock);
    active.updated_at = Set(Utc::now().into());
    let product = active.update(&txn).await?;

    let detail = load_detail(&txn, product).await?;
    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Updated", detail, Some(Meta::empty())))
}

pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;

    Products::find_by_id(id)
        .filter(Column::StoreId.eq(user.store_id))
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    ProductUnits::delete_many()
        .filter(UnitCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    ProductCategories::delete_many()
        .filter(CategoryCol::ProductId.eq(id))
        .exec(&txn)
        .await?;
    Products::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Reads a submitted JSON body; a body that does not fit the form shape is a 422 too.
pub fn decode_form(
    translator: &Translator,
    locale: Locale,
    input: serde_json::Value,
) -> AppResult<ProductForm> {
    serde_json::from_value::<ProductForm>(input.clone()).map_err(|err| {
        let reason = err.to_string();
        let mut errors = FormErrors::default();
        errors.add(
            "form",
            translator.localize("validation.malformed", locale, &[("reason", reason.as_str())]),
        );
        errors.into_error(input, translator, locale)
    })
}

/// Field rules first, then business rules; the business rules only run on a clean form.
pub fn validate_form(
    translator: &Translator,
    locale: Locale,
    mode: FormMode,
    form: ProductForm,
    choices: &FormChoices,
) -> AppResult<ValidProduct> {
    let mut errors = match form.validate() {
        Ok(()) => FormErrors::default(),
        Err(e) => FormErrors::from_validator(&e, translator, locale),
    };
    // submitted as `type`
    errors.rename("product_type_id", "type");

    if mode == FormMode::Update {
        for (field, value) in [
            ("short_code", &form.short_code),
            ("description", &form.description),
        ] {
            if value.is_none() && !errors.has(field) {
                let attribute = field.replace('_', " ");
                errors.add(
                    field,
                    translator.localize(
                        "validation.required",
                        locale,
                        &[("attribute", attribute.as_str())],
                    ),
                );
            }
        }
    }

    if errors.is_empty() {
        check_references(&form, choices, translator, locale, &mut errors);
        check_units(&form, translator, locale, &mut errors);
    }

    let input = serde_json::to_value(&form).unwrap_or_default();
    if !errors.is_empty() {
        tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "product form rejected");
        return Err(errors.into_error(input, translator, locale));
    }

    into_valid(form).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("validated product form is missing required fields"))
    })
}

fn check_references(
    form: &ProductForm,
    choices: &FormChoices,
    translator: &Translator,
    locale: Locale,
    errors: &mut FormErrors,
) {
    let unknown = |attribute: &str| {
        translator.localize("validation.exists", locale, &[("attribute", attribute)])
    };
    let offered = |options: &Dropdown, id: i32| options.contains(&id.to_string());

    if form
        .product_type_id
        .is_some_and(|id| !offered(&choices.product_types, id))
    {
        errors.add("type", unknown("type"));
    }
    for (index, line) in form.units.iter().enumerate() {
        if line.unit_id.is_some_and(|id| !offered(&choices.units, id)) {
            errors.add(format!("units.{index}.unit_id"), unknown("unit id"));
        }
    }
}

fn check_units(
    form: &ProductForm,
    translator: &Translator,
    locale: Locale,
    errors: &mut FormErrors,
) {
    if form.units.is_empty() {
        errors.add("unit", translator.localize("product.unit.at_least_one", locale, &[]));
    } else if form.units.iter().filter(|line| line.is_base).count() != 1 {
        errors.add("unit", translator.localize("product.unit.single_base", locale, &[]));
    }
}

fn into_valid(form: ProductForm) -> Option<ValidProduct> {
    let units = form
        .units
        .into_iter()
        .map(|line| {
            Some(ValidUnit {
                unit_id: line.unit_id?,
                is_base: line.is_base,
                conversion_value: line.conversion_value?,
                remarks: line.remarks.unwrap_or_default(),
            })
        })
        .collect::<Option<Vec<_>>>()?;
    let categories = form
        .categories
        .into_iter()
        .map(|line| {
            Some(ValidCategory {
                code: line.code?,
                name: line.name?,
                description: line.description,
                level: line.level?,
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(ValidProduct {
        product_type_id: form.product_type_id?,
        name: form.name?,
        short_code: form.short_code,
        barcode: form.barcode,
        minimal_in_stock: form.minimal_in_stock,
        description: form.description,
        status: form.status?,
        remarks: form.remarks,
        units,
        categories,
    })
}

async fn form_options<C: ConnectionTrait>(db: &C) -> AppResult<ProductFormOptions> {
    Ok(ProductFormOptions {
        statuses: lookup_service::find_by_category(db, STATUS_CATEGORY).await?,
        product_types: lookup_service::product_type_options(db).await?,
        units: lookup_service::active_unit_options(db).await?,
    })
}

async fn insert_units<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    lines: &[ValidUnit],
) -> AppResult<()> {
    if lines.is_empty() {
        return Ok(());
    }
    let rows = lines.iter().map(|line| UnitActive {
        product_id: Set(product_id),
        unit_id: Set(line.unit_id),
        is_base: Set(line.is_base),
        conversion_value: Set(line.conversion_value),
        remarks: Set(line.remarks.clone()),
        ..Default::default()
    });
    ProductUnits::insert_many(rows).exec(db).await?;
    Ok(())
}

async fn insert_categories<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    store_id: i32,
    lines: &[ValidCategory],
) -> AppResult<()> {
    if lines.is_empty() {
        return Ok(());
    }
    let rows = lines.iter().map(|line| CategoryActive {
        product_id: Set(product_id),
        store_id: Set(store_id),
        code: Set(line.code.clone()),
        name: Set(line.name.clone()),
        description: Set(line.description.clone()),
        level: Set(line.level),
        ..Default::default()
    });
    ProductCategories::insert_many(rows).exec(db).await?;
    Ok(())
}

async fn load_detail<C: ConnectionTrait>(
    db: &C,
    product: ProductModel,
) -> AppResult<ProductDetail> {
    let units = product
        .find_related(ProductUnits)
        .order_by_asc(UnitCol::Id)
        .all(db)
        .await?
        .into_iter()
        .map(unit_from_entity)
        .collect();
    let categories = product
        .find_related(ProductCategories)
        .order_by_asc(CategoryCol::Id)
        .all(db)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();

    Ok(ProductDetail {
        product: product_from_entity(product),
        units,
        categories,
    })
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        store_id: model.store_id,
        product_type_id: model.product_type_id,
        name: model.name,
        short_code: model.short_code,
        barcode: model.barcode,
        minimal_in_stock: model.minimal_in_stock,
        description: model.description,
        status: model.status,
        remarks: model.remarks,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn unit_from_entity(model: UnitModel) -> ProductUnit {
    ProductUnit {
        id: model.id,
        product_id: model.product_id,
        unit_id: model.unit_id,
        is_base: model.is_base,
        conversion_value: model.conversion_value,
        remarks: model.remarks,
    }
}

fn category_from_entity(model: CategoryModel) -> ProductCategory {
    ProductCategory {
        id: model.id,
        product_id: model.product_id,
        store_id: model.store_id,
        code: model.code,
        name: model.name,
        description: model.description,
        level: model.level,
    }
}
