use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use retail_backoffice::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::auth::Claims,
    entity::{
        Customers, Lookups, PriceLevels, ProductTypes, Stores, Units, customers, lookups,
        price_levels, product_types, stores, units,
    },
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    if Stores::find().count(&orm).await? > 0 {
        println!("Database already seeded, skipping reference data");
    } else {
        let store_id = seed_reference_data(&orm).await?;
        seed_customers(&orm, store_id).await?;
        println!("Seed completed. Store ID: {store_id}");
    }

    if let Some(secret) = config.jwt_secret.as_deref() {
        let claims = Claims {
            sub: "1".to_string(),
            name: "admin".to_string(),
            store_id: 1,
            exp: (Utc::now() + Duration::days(7)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;
        println!("Development token: {token}");
    }

    Ok(())
}

async fn seed_reference_data(orm: &DatabaseConnection) -> anyhow::Result<i32> {
    let store = stores::ActiveModel {
        name: Set("Main Store".to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await?;

    let statuses = [("STATUS.ACTIVE", "Active"), ("STATUS.INACTIVE", "Inactive")];
    Lookups::insert_many(statuses.into_iter().map(|(code, description)| lookups::ActiveModel {
        category: Set("STATUS".to_string()),
        code: Set(code.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    }))
    .exec(orm)
    .await?;

    let types = [("Finished goods", "FG"), ("Raw material", "RM"), ("Service", "SV")];
    ProductTypes::insert_many(types.into_iter().map(|(name, code)| product_types::ActiveModel {
        name: Set(name.to_string()),
        code: Set(Some(code.to_string())),
        ..Default::default()
    }))
    .exec(orm)
    .await?;

    let unit_rows = [
        ("Piece", "pcs", "STATUS.ACTIVE"),
        ("Box", "box", "STATUS.ACTIVE"),
        ("Kilogram", "kg", "STATUS.ACTIVE"),
        ("Dozen", "dz", "STATUS.INACTIVE"),
    ];
    Units::insert_many(unit_rows.into_iter().map(|(name, symbol, status)| units::ActiveModel {
        unit_name: Set(name.to_string()),
        symbol: Set(Some(symbol.to_string())),
        status: Set(status.to_string()),
        ..Default::default()
    }))
    .exec(orm)
    .await?;

    PriceLevels::insert_many(["Retail", "Wholesale"].into_iter().map(|name| {
        price_levels::ActiveModel {
            store_id: Set(store.id),
            name: Set(name.to_string()),
            ..Default::default()
        }
    }))
    .exec(orm)
    .await?;

    Ok(store.id)
}

async fn seed_customers(orm: &DatabaseConnection, store_id: i32) -> anyhow::Result<()> {
    let price_level_id = PriceLevels::find().one(orm).await?.map(|level| level.id);
    let now = Utc::now();
    let rows = [
        ("Acme Trading", "Jakarta", 30, "STATUS.ACTIVE"),
        ("Budi Grocery", "Bandung", 14, "STATUS.ACTIVE"),
        ("Citra Mart", "Surabaya", 0, "STATUS.INACTIVE"),
    ];
    Customers::insert_many(rows.into_iter().map(|(name, city, due, status)| {
        customers::ActiveModel {
            store_id: Set(store_id),
            name: Set(name.to_string()),
            city: Set(Some(city.to_string())),
            payment_due_day: Set(due),
            price_level_id: Set(price_level_id),
            status: Set(status.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
    }))
    .exec(orm)
    .await?;
    Ok(())
}
