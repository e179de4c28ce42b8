//! Tuneup Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Tuneup
//! service intake engine, following hexagonal (ports and adapters)
//! architecture.  Given a customer's free-text message it decides which
//! catalog service is meant, and given a service key it resolves a
//! defensible price estimate with an invoice-ready description.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           tuneup-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (IntakeService, CatalogService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: TableSource)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tuneup-adapters (Infrastructure)     │
//! │  (InMemoryTables, TOML table loader)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (Classifier, PriceResolver, Catalog)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tuneup_core::application::IntakeService;
//!
//! // table_source: impl TableSource (from tuneup-adapters)
//! # fn demo(table_source: Box<dyn tuneup_core::application::ports::TableSource>) {
//! let service = IntakeService::new(table_source);
//! let outcome = service
//!     .intake("my car needs an oil change and new brake pads")
//!     .unwrap();
//! println!("{:?} → {}", outcome.classification, outcome.estimate.amount);
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, IntakeOutcome, IntakeService, ports::TableSource,
    };
    pub use crate::domain::{
        CatalogEntry, Classification, Classifier, FallbackTable, Lexicon, LexiconEntry,
        PriceEstimate, PriceResolver, PriceSource, QuoteRecord, ServiceCatalog, ServiceId,
        TableSet,
    };
    pub use crate::error::{TuneupError, TuneupResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
