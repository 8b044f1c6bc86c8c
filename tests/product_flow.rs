mod common;

use retail_backoffice::{
    dto::products::{FormMode, ProductForm},
    entity::{ProductCategories, ProductUnits, Products},
    error::AppError,
    i18n::Locale,
    middleware::auth::AuthUser,
    services::product_service::{self, FormChoices},
    validation::FormErrors,
};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use serde_json::json;

fn form(value: serde_json::Value) -> ProductForm {
    serde_json::from_value(value).expect("product form")
}

fn widget_form(units: serde_json::Value) -> ProductForm {
    form(json!({
        "type": 1,
        "name": "Widget",
        "status": "STATUS.ACTIVE",
        "units": units,
        "categories": [
            { "code": "C1", "name": "Tools", "level": 1 }
        ]
    }))
}

fn expect_validation(err: AppError) -> FormErrors {
    match err {
        AppError::Validation { errors, .. } => errors,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_product_persists_units_and_categories() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let payload = widget_form(json!([
        { "unit_id": 1, "is_base": "true", "conversion_value": 1 },
        { "unit_id": 2, "is_base": false, "conversion_value": 12 }
    ]));
    let resp = product_service::create_product(&state, &user, Locale::En, payload).await?;
    let detail = resp.data.expect("product detail");

    assert_eq!(detail.product.name, "Widget");
    assert_eq!(detail.product.store_id, user.store_id);
    let unit_ids: Vec<i32> = detail.units.iter().map(|u| u.unit_id).collect();
    assert_eq!(unit_ids, vec![1, 2]);
    assert!(detail.units[0].is_base);
    assert_eq!(detail.units[1].conversion_value, 12.0);
    assert_eq!(detail.units[1].remarks, "");
    assert_eq!(detail.categories.len(), 1);
    assert_eq!(detail.categories[0].store_id, user.store_id);

    let fetched = product_service::get_product(&state, detail.product.id)
        .await?
        .data
        .expect("product detail");
    assert_eq!(fetched.units.len(), 2);
    assert_eq!(fetched.categories[0].code, "C1");
    Ok(())
}

#[tokio::test]
async fn create_without_units_is_rejected_and_nothing_is_saved() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let err = product_service::create_product(&state, &user, Locale::En, widget_form(json!([])))
        .await
        .expect_err("empty units must be rejected");
    let errors = expect_validation(err);

    assert_eq!(
        errors.get("unit"),
        Some(&["Please provide at least 1 unit.".to_string()][..])
    );
    assert_eq!(Products::find().count(&state.orm).await?, 0);
    assert_eq!(ProductCategories::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn unit_rule_message_follows_locale() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let choices = FormChoices::load(&state.orm).await?;

    let err = product_service::validate_form(
        &state.translator,
        Locale::Id,
        FormMode::Create,
        widget_form(json!([])),
        &choices,
    )
    .expect_err("empty units must be rejected");
    assert_eq!(err.to_string(), "Data yang diberikan tidak valid.");

    let errors = expect_validation(err);
    assert_eq!(
        errors.get("unit"),
        Some(&["Harap isi paling tidak 1 satuan".to_string()][..])
    );
    Ok(())
}

#[tokio::test]
async fn base_unit_must_be_unique() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    for units in [
        json!([
            { "unit_id": 1, "is_base": true, "conversion_value": 1 },
            { "unit_id": 2, "is_base": true, "conversion_value": 12 }
        ]),
        json!([
            { "unit_id": 1, "is_base": false, "conversion_value": 1 }
        ]),
    ] {
        let err = product_service::create_product(&state, &user, Locale::En, widget_form(units))
            .await
            .expect_err("base unit rule");
        assert!(expect_validation(err).has("unit"));
    }
    assert_eq!(Products::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn field_errors_are_reported_before_unit_rule() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let payload = form(json!({
        "type": 1,
        "name": "",
        "status": "STATUS.ACTIVE",
        "units": []
    }));
    let err = product_service::create_product(&state, &user, Locale::En, payload)
        .await
        .expect_err("missing name");
    let errors = expect_validation(err);

    assert!(errors.has("name"));
    assert!(!errors.has("unit"));
    Ok(())
}

#[tokio::test]
async fn invalid_unit_line_is_keyed_by_position() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let payload = widget_form(json!([
        { "unit_id": 1, "is_base": true, "conversion_value": 1 },
        { "unit_id": 2, "is_base": false, "conversion_value": 0 }
    ]));
    let err = product_service::create_product(&state, &user, Locale::En, payload)
        .await
        .expect_err("zero conversion value");
    let errors = expect_validation(err);

    assert!(errors.has("units.1.conversion_value"));
    Ok(())
}

#[tokio::test]
async fn update_requires_short_code_and_description() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let created = product_service::create_product(
        &state,
        &user,
        Locale::En,
        widget_form(json!([{ "unit_id": 1, "is_base": true, "conversion_value": 1 }])),
    )
    .await?
    .data
    .expect("product detail");

    let err = product_service::update_product(
        &state,
        &user,
        Locale::En,
        created.product.id,
        widget_form(json!([{ "unit_id": 1, "is_base": true, "conversion_value": 1 }])),
    )
    .await
    .expect_err("update without short code");
    let errors = expect_validation(err);

    assert_eq!(
        errors.get("short_code"),
        Some(&["The short code field is required.".to_string()][..])
    );
    assert!(errors.has("description"));
    Ok(())
}

#[tokio::test]
async fn update_replaces_child_lines() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let created = product_service::create_product(
        &state,
        &user,
        Locale::En,
        widget_form(json!([
            { "unit_id": 1, "is_base": true, "conversion_value": 1 },
            { "unit_id": 2, "is_base": false, "conversion_value": 6 },
            { "unit_id": 3, "is_base": false, "conversion_value": 12 }
        ])),
    )
    .await?
    .data
    .expect("product detail");
    let id = created.product.id;

    let payload = form(json!({
        "type": 2,
        "name": "Widget Pro",
        "short_code": "WP",
        "description": "Improved widget",
        "status": "STATUS.INACTIVE",
        "units": [{ "unit_id": 5, "is_base": true, "conversion_value": 1 }],
        "categories": []
    }));

    // submitting the same payload twice leaves the same state
    for _ in 0..2 {
        let updated =
            product_service::update_product(&state, &user, Locale::En, id, payload.clone())
                .await?
                .data
                .expect("product detail");

        assert_eq!(updated.product.name, "Widget Pro");
        assert_eq!(updated.product.product_type_id, 2);
        assert_eq!(updated.product.short_code.as_deref(), Some("WP"));
        let unit_ids: Vec<i32> = updated.units.iter().map(|u| u.unit_id).collect();
        assert_eq!(unit_ids, vec![5]);
        assert!(updated.categories.is_empty());
    }

    assert_eq!(ProductUnits::find().count(&state.orm).await?, 1);
    assert_eq!(ProductCategories::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn delete_removes_product_and_children() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let created = product_service::create_product(
        &state,
        &user,
        Locale::En,
        widget_form(json!([
            { "unit_id": 1, "is_base": true, "conversion_value": 1 },
            { "unit_id": 2, "is_base": false, "conversion_value": 10 }
        ])),
    )
    .await?
    .data
    .expect("product detail");

    product_service::delete_product(&state, &user, created.product.id).await?;

    assert_eq!(Products::find().count(&state.orm).await?, 0);
    assert_eq!(ProductUnits::find().count(&state.orm).await?, 0);
    assert_eq!(ProductCategories::find().count(&state.orm).await?, 0);

    let again = product_service::delete_product(&state, &user, created.product.id).await;
    assert!(matches!(again, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn missing_product_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    assert!(matches!(
        product_service::get_product(&state, 999).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        product_service::edit_form(&state, 999).await,
        Err(AppError::NotFound)
    ));

    let payload = form(json!({
        "type": 1,
        "name": "Ghost",
        "short_code": "G",
        "description": "Nothing here",
        "status": "STATUS.ACTIVE",
        "units": [{ "unit_id": 1, "is_base": true, "conversion_value": 1 }]
    }));
    assert!(matches!(
        product_service::update_product(&state, &user, Locale::En, 999, payload).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn form_options_list_statuses_types_and_active_units() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let options = product_service::create_form(&state).await?.data.expect("form options");
    assert_eq!(options.statuses.label("STATUS.ACTIVE"), Some("Active"));
    assert_eq!(options.product_types.len(), 2);
    assert_eq!(options.units.len(), 5);
    assert_eq!(options.units.label("6"), None);
    Ok(())
}

#[tokio::test]
async fn incomplete_lines_are_reported_as_field_errors() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let input = json!({
        "type": 1,
        "name": "",
        "status": "STATUS.ACTIVE",
        "units": [{ "is_base": "true" }]
    });
    let payload = product_service::decode_form(&state.translator, Locale::En, input)?;
    let err = product_service::create_product(&state, &user, Locale::En, payload)
        .await
        .expect_err("incomplete unit line");

    match err {
        AppError::Validation { message, errors, input } => {
            assert_eq!(message, "The given data was invalid.");
            assert!(errors.has("name"));
            assert_eq!(
                errors.get("units.0.unit_id"),
                Some(&["The unit id field is required.".to_string()][..])
            );
            assert!(errors.has("units.0.conversion_value"));
            assert_eq!(input["units"][0]["is_base"], json!(true));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(Products::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn numbers_posted_as_strings_are_accepted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let input = json!({
        "type": "2",
        "name": "Rope",
        "status": "STATUS.ACTIVE",
        "minimal_in_stock": "",
        "units": [
            { "unit_id": "1", "is_base": "true", "conversion_value": "1" },
            { "unit_id": "2", "is_base": "false", "conversion_value": "12.5" }
        ],
        "categories": [{ "code": "C1", "name": "Tools", "level": "0" }]
    });
    let payload = product_service::decode_form(&state.translator, Locale::En, input)?;
    let detail = product_service::create_product(&state, &user, Locale::En, payload)
        .await?
        .data
        .expect("product detail");

    assert_eq!(detail.product.product_type_id, 2);
    assert_eq!(detail.product.minimal_in_stock, None);
    assert_eq!(detail.units[1].conversion_value, 12.5);
    assert!(!detail.units[1].is_base);
    assert_eq!(detail.categories[0].level, 0);
    Ok(())
}

#[tokio::test]
async fn unreadable_body_keeps_the_input() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let input = json!({ "type": "abc", "name": "Widget", "units": "none" });
    let err = product_service::decode_form(&state.translator, Locale::En, input.clone())
        .expect_err("body does not fit the form");

    match err {
        AppError::Validation { errors, input: kept, .. } => {
            assert!(errors.has("form"));
            assert_eq!(kept, input);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn unknown_type_and_units_are_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    let mut payload = widget_form(json!([
        { "unit_id": 1, "is_base": true, "conversion_value": 1 },
        { "unit_id": 6, "is_base": false, "conversion_value": 12 },
        { "unit_id": 999, "is_base": false, "conversion_value": 24 }
    ]));
    payload.product_type_id = Some(999);

    let err = product_service::create_product(&state, &user, Locale::En, payload)
        .await
        .expect_err("references outside the dropdowns");
    let errors = expect_validation(err);

    assert_eq!(
        errors.get("type"),
        Some(&["The selected type is invalid.".to_string()][..])
    );
    assert!(!errors.has("units.0.unit_id"));
    // unit 6 exists but is inactive
    assert!(errors.has("units.1.unit_id"));
    assert!(errors.has("units.2.unit_id"));
    assert_eq!(Products::find().count(&state.orm).await?, 0);
    assert_eq!(ProductUnits::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn missing_type_is_keyed_as_submitted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let choices = FormChoices::load(&state.orm).await?;

    let mut payload = widget_form(json!([
        { "unit_id": 1, "is_base": true, "conversion_value": 1 }
    ]));
    payload.product_type_id = None;

    let err = product_service::validate_form(
        &state.translator,
        Locale::En,
        FormMode::Create,
        payload,
        &choices,
    )
    .expect_err("type is required");
    let errors = expect_validation(err);

    assert!(errors.has("type"));
    assert!(!errors.has("product_type_id"));
    Ok(())
}

#[tokio::test]
async fn failed_write_rolls_back_the_whole_product() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::acting_user();

    // category lines are written last; make that insert fail
    state
        .orm
        .execute_unprepared("DROP TABLE product_categories")
        .await?;

    let payload = widget_form(json!([
        { "unit_id": 1, "is_base": true, "conversion_value": 1 },
        { "unit_id": 2, "is_base": false, "conversion_value": 12 }
    ]));
    let result = product_service::create_product(&state, &user, Locale::En, payload).await;

    assert!(matches!(result, Err(AppError::OrmError(_))));
    assert_eq!(Products::find().count(&state.orm).await?, 0);
    assert_eq!(ProductUnits::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn products_of_another_store_are_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let owner = common::acting_user();

    let created = product_service::create_product(
        &state,
        &owner,
        Locale::En,
        widget_form(json!([{ "unit_id": 1, "is_base": true, "conversion_value": 1 }])),
    )
    .await?
    .data
    .expect("product detail");
    let id = created.product.id;

    let outsider = AuthUser {
        user_id: 8,
        name: "Budi".into(),
        store_id: owner.store_id + 1,
    };
    let payload = form(json!({
        "type": 1,
        "name": "Taken over",
        "short_code": "TO",
        "description": "Edited from another store",
        "status": "STATUS.ACTIVE",
        "units": [{ "unit_id": 2, "is_base": true, "conversion_value": 1 }]
    }));

    assert!(matches!(
        product_service::update_product(&state, &outsider, Locale::En, id, payload).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        product_service::delete_product(&state, &outsider, id).await,
        Err(AppError::NotFound)
    ));

    let still_there = product_service::get_product(&state, id)
        .await?
        .data
        .expect("product detail");
    assert_eq!(still_there.product.name, "Widget");
    assert_eq!(still_there.units[0].unit_id, 1);
    Ok(())
}
