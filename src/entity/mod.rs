pub mod audit_logs;
pub mod customers;
pub mod lookups;
pub mod price_levels;
pub mod product_categories;
pub mod product_types;
pub mod product_units;
pub mod products;
pub mod stores;
pub mod units;

pub use audit_logs::Entity as AuditLogs;
pub use customers::Entity as Customers;
pub use lookups::Entity as Lookups;
pub use price_levels::Entity as PriceLevels;
pub use product_categories::Entity as ProductCategories;
pub use product_types::Entity as ProductTypes;
pub use product_units::Entity as ProductUnits;
pub use products::Entity as Products;
pub use stores::Entity as Stores;
pub use units::Entity as Units;
