use sea_orm_migration::prelude::*;

use super::reference_data::{ProductTypes, Stores, Units};

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240101_000002_products"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::StoreId).integer().not_null())
                    .col(ColumnDef::new(Products::ProductTypeId).integer().not_null())
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::ShortCode).string())
                    .col(ColumnDef::new(Products::Barcode).string())
                    .col(ColumnDef::new(Products::MinimalInStock).integer())
                    .col(ColumnDef::new(Products::Description).string())
                    .col(ColumnDef::new(Products::Status).string().not_null())
                    .col(ColumnDef::new(Products::Remarks).text())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Products::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_store")
                            .from(Products::Table, Products::StoreId)
                            .to(Stores::Table, Stores::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_product_type")
                            .from(Products::Table, Products::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductUnits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductUnits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductUnits::ProductId).integer().not_null())
                    .col(ColumnDef::new(ProductUnits::UnitId).integer().not_null())
                    .col(
                        ColumnDef::new(ProductUnits::IsBase)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ProductUnits::ConversionValue).double().not_null())
                    .col(
                        ColumnDef::new(ProductUnits::Remarks)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_units_product")
                            .from(ProductUnits::Table, ProductUnits::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_units_unit")
                            .from(ProductUnits::Table, ProductUnits::UnitId)
                            .to(Units::Table, Units::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductCategories::ProductId).integer().not_null())
                    .col(ColumnDef::new(ProductCategories::StoreId).integer().not_null())
                    .col(ColumnDef::new(ProductCategories::Code).string().not_null())
                    .col(ColumnDef::new(ProductCategories::Name).string().not_null())
                    .col(ColumnDef::new(ProductCategories::Description).string())
                    .col(
                        ColumnDef::new(ProductCategories::Level)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_categories_product")
                            .from(ProductCategories::Table, ProductCategories::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductCategories::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(ProductUnits::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(Iden)]
pub enum Products {
    Table,
    Id,
    StoreId,
    ProductTypeId,
    Name,
    ShortCode,
    Barcode,
    MinimalInStock,
    Description,
    Status,
    Remarks,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ProductUnits {
    Table,
    Id,
    ProductId,
    UnitId,
    IsBase,
    ConversionValue,
    Remarks,
}

#[derive(Iden)]
pub enum ProductCategories {
    Table,
    Id,
    ProductId,
    StoreId,
    Code,
    Name,
    Description,
    Level,
}
