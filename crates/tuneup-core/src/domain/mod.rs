// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Tuneup.
//!
//! This module contains pure business logic with ZERO I/O dependencies.
//! Table loading and storage concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: classification and pricing are synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: all domain objects are Clone + PartialEq
//! - **Total operations**: `classify` and `resolve` never fail; absence of
//!   a match is a normal result, not an error
//!
// Public API - what the world sees
pub mod catalog;
pub mod classify;
pub mod error;
pub mod lexicon;
pub mod pricing;
pub mod tables;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use catalog::{CatalogEntry, ServiceCatalog, ServiceId};
pub use classify::{Classification, Classifier};
pub use error::{DomainError, ErrorCategory};
pub use lexicon::{Lexicon, LexiconEntry};
pub use pricing::{
    FallbackEntry, FallbackTable, PriceEstimate, PriceResolver, PriceSource, QuoteRecord,
    normalize_key,
};
pub use tables::TableSet;
pub use validation::DomainValidator;
