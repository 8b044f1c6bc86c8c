pub mod auth;
pub mod lookups;
pub mod products;
pub mod reports;
