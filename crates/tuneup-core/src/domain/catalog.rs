//! Service catalog domain aggregate.
//!
//! The catalog is the authoritative list of sellable services: stable slug
//! id, display name, grouping category, and a min/max price range.  It is
//! supplied by configuration at startup and is **read-only** for the life of
//! the process — every operation here is a pure query.
//!
//! ## Ordering is a contract
//!
//! [`ServiceCatalog`] preserves declaration order, and fuzzy price
//! resolution ("first entry in catalog order wins", see
//! [`crate::domain::pricing`]) depends on it.  Callers must therefore keep
//! the order of their catalog source stable across loads; the catalog never
//! re-sorts or deduplicates silently — duplicates are a validation error
//! instead.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Stable slug identifier for a catalog service.
///
/// ## Format
///
/// Lower-case words joined by hyphens (e.g. `oil-change`, `brake-pads-front`).
/// The slug form is an invariant enforced by [`CatalogEntry::validate`]:
/// exact price-resolution lookups compare a normalized key against the id,
/// so an id that is not already in normalized form could never be matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if the id is in canonical slug form: non-empty, lower-case
    /// alphanumeric words separated by single hyphens.
    pub fn is_slug(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('-')
            && !self.0.ends_with('-')
            && !self.0.contains("--")
            && self
                .0
                .chars()
                .all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit())
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One sellable service: identity, display data, and a price range.
///
/// ## Invariants (enforced by `validate()`)
///
/// 1. `id` is in slug form (see [`ServiceId::is_slug`])
/// 2. `name` is non-empty (it becomes the invoice line description)
/// 3. `min_price` and `max_price` are non-negative
/// 4. `min_price <= max_price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable slug id (e.g. `oil-change`).
    pub id: ServiceId,

    /// Human-readable display name (e.g. "Oil Change").
    pub name: String,

    /// Grouping label for display/reporting.  Never used in scoring.
    pub category: String,

    /// Lower bound of the advertised price range.
    pub min_price: Decimal,

    /// Upper bound of the advertised price range.
    pub max_price: Decimal,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<ServiceId>,
        name: impl Into<String>,
        category: impl Into<String>,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            min_price,
            max_price,
        }
    }

    /// Validate all entry invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.id.is_slug() {
            return Err(DomainError::InvalidServiceId {
                id: self.id.to_string(),
                reason: "expected lower-case hyphenated slug".into(),
            });
        }

        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyServiceName {
                id: self.id.to_string(),
            });
        }

        if self.min_price.is_sign_negative() || self.max_price.is_sign_negative() {
            return Err(DomainError::NegativePrice {
                id: self.id.to_string(),
            });
        }

        if self.min_price > self.max_price {
            return Err(DomainError::InvalidPriceRange {
                id: self.id.to_string(),
                min: self.min_price.to_string(),
                max: self.max_price.to_string(),
            });
        }

        Ok(())
    }

    /// Midpoint of the advertised range, rounded half-up to two decimal
    /// places.  This is an *estimate*, not a quote; UI copy consuming it
    /// must present it as such.
    pub fn estimated_price(&self) -> Decimal {
        use rust_decimal::RoundingStrategy;

        let mut midpoint = ((self.min_price + self.max_price) / Decimal::from(2))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        midpoint.rescale(2);
        midpoint
    }
}

/// The full, ordered service catalog.
///
/// A thin wrapper over `Vec<CatalogEntry>` that preserves declaration order
/// and centralises lookup and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    entries: Vec<CatalogEntry>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry (maintains declaration order).
    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Fluent variant of `push` for builder chains.
    pub fn with_entry(mut self, entry: CatalogEntry) -> Self {
        self.push(entry);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    /// Entries in a given category, catalog order preserved.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.category.eq_ignore_ascii_case(category))
    }

    /// Distinct category labels in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(entry.category.as_str());
            }
        }
        seen
    }

    /// Validate every entry plus catalog-level invariants (unique ids).
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.entries {
            entry.validate()?;
            if !seen.insert(entry.id.as_str()) {
                return Err(DomainError::DuplicateServiceId {
                    id: entry.id.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ServiceCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
