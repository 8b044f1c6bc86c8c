#![allow(dead_code)]

use chrono::Utc;
use retail_backoffice::{
    db::{create_orm_conn, run_migrations},
    entity::{customers, lookups, price_levels, product_types, stores, units},
    middleware::auth::AuthUser,
    state::AppState,
};
use sea_orm::{ActiveModelTrait, Set};

/// Fresh in-memory database with migrations applied and reference rows seeded.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    let state = AppState::new(orm, None)?;
    seed_reference_data(&state).await?;
    Ok(state)
}

pub fn acting_user() -> AuthUser {
    AuthUser {
        user_id: 7,
        name: "Siti".into(),
        store_id: 1,
    }
}

async fn seed_reference_data(state: &AppState) -> anyhow::Result<()> {
    stores::ActiveModel {
        name: Set("Main Store".into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    for (code, description) in [("STATUS.ACTIVE", "Active"), ("STATUS.INACTIVE", "Inactive")] {
        lookups::ActiveModel {
            category: Set("STATUS".into()),
            code: Set(code.into()),
            description: Set(description.into()),
            ..Default::default()
        }
        .insert(&state.orm)
        .await?;
    }

    for name in ["Finished goods", "Raw material"] {
        product_types::ActiveModel {
            name: Set(name.into()),
            ..Default::default()
        }
        .insert(&state.orm)
        .await?;
    }

    // ids 1..=5 active, 6 inactive
    for (name, status) in [
        ("Piece", "STATUS.ACTIVE"),
        ("Box", "STATUS.ACTIVE"),
        ("Kilogram", "STATUS.ACTIVE"),
        ("Litre", "STATUS.ACTIVE"),
        ("Pack", "STATUS.ACTIVE"),
        ("Dozen", "STATUS.INACTIVE"),
    ] {
        units::ActiveModel {
            unit_name: Set(name.into()),
            status: Set(status.into()),
            ..Default::default()
        }
        .insert(&state.orm)
        .await?;
    }

    price_levels::ActiveModel {
        store_id: Set(1),
        name: Set("Retail".into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(())
}

pub async fn insert_customer(
    state: &AppState,
    name: &str,
    status: &str,
    remarks: Option<&str>,
) -> anyhow::Result<customers::Model> {
    let now = Utc::now();
    let customer = customers::ActiveModel {
        store_id: Set(1),
        name: Set(name.into()),
        city: Set(Some("Jakarta".into())),
        payment_due_day: Set(30),
        price_level_id: Set(Some(1)),
        status: Set(status.into()),
        remarks: Set(remarks.map(str::to_string)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    Ok(customer)
}
