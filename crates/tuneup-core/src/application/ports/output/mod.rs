//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tuneup-adapters` crate provides implementations.

use crate::domain::{ServiceCatalog, TableSet};
use crate::error::TuneupResult;

/// Port for supplying the engine's configuration tables.
///
/// Implemented by:
/// - `tuneup_adapters::table_store::InMemoryTables` (built-in + loaded tables)
///
/// ## Design Notes
///
/// - Returns owned snapshots: the tables are immutable for the process
///   lifetime, and a snapshot keeps services free of lock lifetimes
/// - One `tables()` call yields all three tables consistently; callers must
///   not assemble a set from separate calls around a reload
pub trait TableSource: Send + Sync {
    /// One consistent snapshot of catalog, lexicon, and fallback table.
    fn tables(&self) -> TuneupResult<TableSet>;

    /// The catalog alone, for read-side queries.
    fn catalog(&self) -> TuneupResult<ServiceCatalog> {
        Ok(self.tables()?.catalog)
    }
}
