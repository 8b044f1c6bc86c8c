use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240101_000001_reference_data"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stores::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lookups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lookups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lookups::Category).string().not_null())
                    .col(ColumnDef::new(Lookups::Code).string().not_null())
                    .col(ColumnDef::new(Lookups::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lookups_category_code")
                    .table(Lookups::Table)
                    .col(Lookups::Category)
                    .col(Lookups::Code)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductTypes::Name).string().not_null())
                    .col(ColumnDef::new(ProductTypes::Code).string())
                    .col(ColumnDef::new(ProductTypes::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Units::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Units::UnitName).string().not_null())
                    .col(ColumnDef::new(Units::Symbol).string())
                    .col(ColumnDef::new(Units::Status).string().not_null())
                    .col(ColumnDef::new(Units::Remarks).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PriceLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceLevels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PriceLevels::StoreId).integer().not_null())
                    .col(ColumnDef::new(PriceLevels::Name).string().not_null())
                    .col(ColumnDef::new(PriceLevels::Description).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_levels_store")
                            .from(PriceLevels::Table, PriceLevels::StoreId)
                            .to(Stores::Table, Stores::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PriceLevels::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Units::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ProductTypes::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Lookups::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Stores::Table).to_owned()).await
    }
}

#[derive(Iden)]
pub enum Stores {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
pub enum Lookups {
    Table,
    Id,
    Category,
    Code,
    Description,
}

#[derive(Iden)]
pub enum ProductTypes {
    Table,
    Id,
    Name,
    Code,
    Description,
}

#[derive(Iden)]
pub enum Units {
    Table,
    Id,
    UnitName,
    Symbol,
    Status,
    Remarks,
}

#[derive(Iden)]
pub enum PriceLevels {
    Table,
    Id,
    StoreId,
    Name,
    Description,
}
