use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub store_id: i32,
    pub name: String,
    pub sign_code: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub fax_num: Option<String>,
    pub tax_id: Option<String>,
    pub payment_due_day: i32,
    pub price_level_id: Option<i32>,
    pub status: String,
    pub remarks: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stores::Entity",
        from = "Column::StoreId",
        to = "super::stores::Column::Id"
    )]
    Stores,
    #[sea_orm(
        belongs_to = "super::price_levels::Entity",
        from = "Column::PriceLevelId",
        to = "super::price_levels::Column::Id"
    )]
    PriceLevels,
}

impl Related<super::stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stores.def()
    }
}

impl Related<super::price_levels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceLevels.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
