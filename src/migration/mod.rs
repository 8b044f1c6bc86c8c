pub mod audit_logs;
pub mod customers;
pub mod products;
pub mod reference_data;

use sea_orm_migration::prelude::*;

pub struct Migrator;

impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(reference_data::Migration),
            Box::new(products::Migration),
            Box::new(customers::Migration),
            Box::new(audit_logs::Migration),
        ]
    }
}
