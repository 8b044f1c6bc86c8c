use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    dto::reports::CustomerReportQuery,
    entity::{
        customers::{Column as CustomerCol, Entity as Customers},
        price_levels::{Column as PriceLevelCol, Entity as PriceLevels},
        stores::{Column as StoreCol, Entity as Stores},
    },
    error::AppResult,
    i18n::Locale,
    middleware::auth::AuthUser,
    report::customer::{CustomerRecord, CustomerReport, CustomerReportParameters},
    services::lookup_service::{self, STATUS_CATEGORY},
    state::AppState,
};

pub struct RenderedReport {
    pub filename: String,
    pub body: String,
}

pub async fn customer_report(
    state: &AppState,
    user: &AuthUser,
    locale: Locale,
    query: CustomerReportQuery,
) -> AppResult<RenderedReport> {
    let parameters = CustomerReportParameters {
        customer_name: query.name,
        profile_name: query.profile_name,
        bank_account: query.bank_account,
    };

    let mut finder = Customers::find().order_by_asc(CustomerCol::Name);
    if let Some(name) = parameters.customer_name.as_deref().filter(|n| !n.is_empty()) {
        finder = finder.filter(CustomerCol::Name.contains(name));
    }
    let customers = finder.all(&state.orm).await?;

    let store_ids: HashSet<i32> = customers.iter().map(|c| c.store_id).collect();
    let stores: HashMap<i32, String> = Stores::find()
        .filter(StoreCol::Id.is_in(store_ids))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    let price_level_ids: HashSet<i32> = customers.iter().filter_map(|c| c.price_level_id).collect();
    let price_levels: HashMap<i32, String> = PriceLevels::find()
        .filter(PriceLevelCol::Id.is_in(price_level_ids))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    let statuses = lookup_service::find_by_category(&state.orm, STATUS_CATEGORY).await?;

    let records: Vec<CustomerRecord> = customers
        .into_iter()
        .map(|c| CustomerRecord::resolve(c, &stores, &price_levels))
        .collect();

    let now = Utc::now();
    let report_date = now.format("%d-%m-%Y %H:%M").to_string();
    let body = CustomerReport {
        customers: &records,
        parameters: &parameters,
        show_parameter: parameters.any(),
        statuses: &statuses,
        current_user: &user.name,
        report_date: &report_date,
        locale,
    }
    .render(&state.reports, &state.translator)?;

    tracing::info!(rows = records.len(), user_id = user.user_id, "customer report rendered");

    Ok(RenderedReport {
        filename: format!("customer_report_{}.xls", now.format("%Y%m%d%H%M%S")),
        body,
    })
}
