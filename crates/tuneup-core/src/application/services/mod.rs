//! Application services - use case orchestration.

pub mod catalog_service;
pub mod intake_service;

pub use catalog_service::CatalogService;
pub use intake_service::{IntakeOutcome, IntakeService};
