use sea_orm_migration::prelude::*;

use super::reference_data::{PriceLevels, Stores};

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240101_000003_customers"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::StoreId).integer().not_null())
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(ColumnDef::new(Customers::SignCode).string())
                    .col(ColumnDef::new(Customers::Address).string())
                    .col(ColumnDef::new(Customers::City).string())
                    .col(ColumnDef::new(Customers::PhoneNumber).string())
                    .col(ColumnDef::new(Customers::FaxNum).string())
                    .col(ColumnDef::new(Customers::TaxId).string())
                    .col(
                        ColumnDef::new(Customers::PaymentDueDay)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Customers::PriceLevelId).integer())
                    .col(ColumnDef::new(Customers::Status).string().not_null())
                    .col(ColumnDef::new(Customers::Remarks).text())
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Customers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_store")
                            .from(Customers::Table, Customers::StoreId)
                            .to(Stores::Table, Stores::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_price_level")
                            .from(Customers::Table, Customers::PriceLevelId)
                            .to(PriceLevels::Table, PriceLevels::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customers::Table).to_owned()).await
    }
}

#[derive(Iden)]
pub enum Customers {
    Table,
    Id,
    StoreId,
    Name,
    SignCode,
    Address,
    City,
    PhoneNumber,
    FaxNum,
    TaxId,
    PaymentDueDay,
    PriceLevelId,
    Status,
    Remarks,
    CreatedAt,
    UpdatedAt,
}
