//! Application layer - use cases and ports.
//!
//! Orchestrates the domain (classifier, price resolver) behind
//! constructor-injected ports.  No business logic lives here; the services
//! only wire table snapshots into domain calls.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{CatalogService, IntakeOutcome, IntakeService};
