use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    dto::lookups::Dropdown,
    entity::{
        lookups::{Column as LookupCol, Entity as Lookups},
        product_types::{Column as ProductTypeCol, Entity as ProductTypes},
        units::{Column as UnitCol, Entity as Units},
    },
    error::AppResult,
};

pub const STATUS_CATEGORY: &str = "STATUS";
pub const ACTIVE_STATUS: &str = "STATUS.ACTIVE";

/// Code to description pairs of one lookup category, in insertion order.
pub async fn find_by_category<C: ConnectionTrait>(db: &C, category: &str) -> AppResult<Dropdown> {
    let rows = Lookups::find()
        .filter(LookupCol::Category.eq(category))
        .order_by_asc(LookupCol::Id)
        .all(db)
        .await?;

    Ok(Dropdown::from_pairs(
        rows.into_iter().map(|row| (row.code, row.description)),
    ))
}

pub async fn product_type_options<C: ConnectionTrait>(db: &C) -> AppResult<Dropdown> {
    let rows = ProductTypes::find()
        .order_by_asc(ProductTypeCol::Name)
        .all(db)
        .await?;

    Ok(Dropdown::from_pairs(rows.into_iter().map(|row| (row.id, row.name))))
}

pub async fn active_unit_options<C: ConnectionTrait>(db: &C) -> AppResult<Dropdown> {
    let rows = Units::find()
        .filter(UnitCol::Status.eq(ACTIVE_STATUS))
        .order_by_asc(UnitCol::UnitName)
        .all(db)
        .await?;

    Ok(Dropdown::from_pairs(
        rows.into_iter().map(|row| (row.id, row.unit_name)),
    ))
}
