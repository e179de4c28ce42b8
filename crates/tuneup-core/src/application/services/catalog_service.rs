//! Catalog Service - read-side catalog queries.
//!
//! Handles catalog lookups for display and reporting.
//! Separated from IntakeService for single responsibility.

use crate::{
    application::{ApplicationError, ports::TableSource},
    domain::CatalogEntry,
    error::TuneupResult,
};

/// Service for catalog queries.
pub struct CatalogService {
    tables: Box<dyn TableSource>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(tables: Box<dyn TableSource>) -> Self {
        Self { tables }
    }

    /// Get an entry by exact id.
    pub fn get(&self, id: &str) -> TuneupResult<CatalogEntry> {
        let catalog = self.tables.catalog()?;
        catalog.get(id).cloned().ok_or_else(|| {
            ApplicationError::UnknownService { id: id.to_owned() }.into()
        })
    }

    /// List all entries in catalog order.
    pub fn list(&self) -> TuneupResult<Vec<CatalogEntry>> {
        Ok(self.tables.catalog()?.iter().cloned().collect())
    }

    /// Entries in one category, catalog order preserved.
    pub fn by_category(&self, category: &str) -> TuneupResult<Vec<CatalogEntry>> {
        Ok(self
            .tables
            .catalog()?
            .by_category(category)
            .cloned()
            .collect())
    }

    /// Distinct category labels in first-appearance order.
    pub fn categories(&self) -> TuneupResult<Vec<String>> {
        Ok(self
            .tables
            .catalog()?
            .categories()
            .into_iter()
            .map(str::to_owned)
            .collect())
    }
}
