//! In-memory table store with built-in tables.

use std::sync::{Arc, RwLock};

use tuneup_core::{
    application::{ApplicationError, ports::TableSource},
    domain::{DomainValidator as validator, TableSet},
    error::TuneupResult,
};

use crate::builtin_tables;

/// Thread-safe in-memory table store.
///
/// The tables are immutable for the process lifetime once loaded; the lock
/// exists so a store instance can be shared across threads and replaced
/// wholesale in tests.
#[derive(Clone)]
pub struct InMemoryTables {
    inner: Arc<RwLock<TableSet>>,
}

impl InMemoryTables {
    /// Create a store with empty tables.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TableSet::default())),
        }
    }

    /// Create a store holding a specific table set (validated first).
    pub fn with_tables(tables: TableSet) -> TuneupResult<Self> {
        validator::validate_tables(&tables)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(tables)),
        })
    }

    /// Create a store with the shipped tables loaded (built-in defaults, or
    /// the override file if one is discovered).
    pub fn with_builtin() -> TuneupResult<Self> {
        Self::with_tables(builtin_tables::load_tables()?)
    }

    /// Replace the stored tables (validated first).
    pub fn replace(&self, tables: TableSet) -> TuneupResult<()> {
        validator::validate_tables(&tables)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = tables;
        Ok(())
    }

    /// Number of catalog entries currently stored.
    pub fn catalog_len(&self) -> usize {
        self.inner
            .read()
            .map(|t| t.catalog.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog_len() == 0
    }
}

impl Default for InMemoryTables {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSource for InMemoryTables {
    fn tables(&self) -> TuneupResult<TableSet> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.clone())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tuneup_core::domain::{CatalogEntry, FallbackTable, Lexicon, ServiceCatalog};

    use super::*;

    #[test]
    fn builtin_store_is_populated() {
        let store = InMemoryTables::with_builtin().unwrap();
        assert!(!store.is_empty());

        let tables = store.tables().unwrap();
        assert!(tables.catalog.get("oil-change").is_some());
        assert!(!tables.lexicon.is_empty());
        assert!(!tables.fallback.is_empty());
    }

    #[test]
    fn with_tables_rejects_invalid_catalog() {
        let tables = TableSet::new(
            ServiceCatalog::new().with_entry(CatalogEntry::new(
                "bad id",
                "Bad",
                "misc",
                Decimal::ONE,
                Decimal::TWO,
            )),
            Lexicon::new(),
            FallbackTable::new(),
        );
        assert!(InMemoryTables::with_tables(tables).is_err());
    }

    #[test]
    fn replace_swaps_tables() {
        let store = InMemoryTables::new();
        assert!(store.is_empty());

        let tables = TableSet::new(
            ServiceCatalog::new().with_entry(CatalogEntry::new(
                "oil-change",
                "Oil Change",
                "maintenance",
                Decimal::new(60, 0),
                Decimal::new(120, 0),
            )),
            Lexicon::new().with_service("oil-change", &["oil"]),
            FallbackTable::new(),
        );
        store.replace(tables).unwrap();
        assert_eq!(store.catalog_len(), 1);
    }
}
