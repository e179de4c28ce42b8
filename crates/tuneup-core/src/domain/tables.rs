//! The three configuration tables the engine runs on, as one unit.
//!
//! Catalog, lexicon, and fallback table are loaded together at startup and
//! stay immutable for the process lifetime.  Grouping them lets ports hand
//! out one consistent snapshot instead of three calls that could interleave
//! with a reload.

use serde::{Deserialize, Serialize};

use crate::domain::{
    catalog::ServiceCatalog, error::DomainError, lexicon::Lexicon, pricing::FallbackTable,
};

/// One consistent snapshot of all engine tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSet {
    pub catalog: ServiceCatalog,
    pub lexicon: Lexicon,
    pub fallback: FallbackTable,
}

impl TableSet {
    pub fn new(catalog: ServiceCatalog, lexicon: Lexicon, fallback: FallbackTable) -> Self {
        Self {
            catalog,
            lexicon,
            fallback,
        }
    }

    /// Validate all three tables.
    ///
    /// Lexicon ids absent from the catalog are permitted — the two tables
    /// are independently maintained — so no cross-table check happens here.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.catalog.validate()?;
        self.lexicon.validate()?;
        self.fallback.validate()
    }

    /// Lexicon service ids with no catalog entry.
    ///
    /// Not an error (see [`Self::validate`]) but worth surfacing in logs and
    /// `list --all` style reporting so table maintainers notice drift.
    pub fn orphaned_lexicon_ids(&self) -> Vec<&str> {
        self.lexicon
            .iter()
            .map(|e| e.service_id.as_str())
            .filter(|id| self.catalog.get(id).is_none())
            .collect()
    }
}
