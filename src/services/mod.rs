pub mod lookup_service;
pub mod product_service;
pub mod report_service;
