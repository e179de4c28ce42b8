//! Price resolution: service key → estimated price + invoice description.
//!
//! Given a service identifier — a canonical catalog id, a near-miss human
//! phrase ("Oil Change", "oil_change"), or something unrecognised — produce
//! a defensible estimate and a human-readable description for invoicing.
//!
//! ## Resolution order (first successful stage wins)
//!
//! 1. **Normalize** the key: lower-case, runs of whitespace → one hyphen.
//! 2. **Exact** catalog match on id.
//! 3. **Fuzzy** catalog match: normalized display name contains the
//!    normalized key, or the id is a substring of the normalized key.
//!    First entry in catalog order wins.
//! 4. **Fallback table**: first declared key occurring as a substring of
//!    the normalized input.
//! 5. **Default**: fixed 150.00 with the original key as description.
//!
//! The staged fallback is the core design decision: a booking flow must
//! never abort because a pricing lookup failed, so resolution is a total
//! function with no error path.  Callers that care about confidence can
//! inspect [`PriceSource`] and route fallback/default estimates to a human.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{
    catalog::{CatalogEntry, ServiceCatalog},
    error::DomainError,
};

/// Which resolution stage produced an estimate.
///
/// Exposed so downstream code can flag low-confidence estimates
/// (fallback/default) for human review before they reach an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Resolved from a catalog entry (exact or fuzzy match).
    Catalog,
    /// Resolved from the static fallback price table.
    Fallback,
    /// Nothing matched; the fixed default was used.
    Default,
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::Fallback => write!(f, "fallback"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// An estimated price line, always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Estimate in currency units, always at two decimal places.
    pub amount: Decimal,
    /// Invoice-ready description: the catalog display name when resolved,
    /// otherwise the caller's original key preserved verbatim.
    pub description: String,
    /// Resolution stage that produced the amount.
    pub source: PriceSource,
}

/// An estimate wrapped with a unique instance id.
///
/// [`PriceEstimate`] is the *value* (two equal estimates are equal);
/// `QuoteRecord` is the *instance* — the specific line rendered for one
/// submission, identified for provenance on quotes and invoices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Unique instance identifier (never nil except in error states).
    pub uuid: Uuid,
    /// The estimate itself.
    pub estimate: PriceEstimate,
}

impl QuoteRecord {
    /// Wrap an estimate with a fresh random id.
    pub fn new(estimate: PriceEstimate) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            estimate,
        }
    }

    /// Create with a specific id (for reconstruction from persistence).
    pub fn with_uuid(uuid: Uuid, estimate: PriceEstimate) -> Self {
        Self { uuid, estimate }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.uuid.is_nil() {
            return Err(DomainError::InvalidQuoteRecord {
                reason: "UUID cannot be nil".into(),
            });
        }
        Ok(())
    }
}

/// One row of the static fallback price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackEntry {
    /// Service-family key matched by substring containment (e.g. "brake").
    pub key: String,
    /// Approximate price for that family.
    pub amount: Decimal,
}

impl FallbackEntry {
    pub fn new(key: impl Into<String>, amount: Decimal) -> Self {
        Self {
            key: key.into(),
            amount,
        }
    }
}

/// Static, lower-priority price lookup consulted only when the catalog
/// yields no match.  Declared order is the selection order: the *first* key
/// contained in the normalized input wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackTable {
    entries: Vec<FallbackEntry>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<FallbackEntry>) -> Self {
        Self { entries }
    }

    /// Fluent helper for building a table inline.
    pub fn with_entry(mut self, key: impl Into<String>, amount: Decimal) -> Self {
        self.entries.push(FallbackEntry::new(key, amount));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &FallbackEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry (declared order) whose key occurs in `normalized_key`.
    pub fn lookup(&self, normalized_key: &str) -> Option<&FallbackEntry> {
        self.entries
            .iter()
            .find(|e| normalized_key.contains(e.key.as_str()))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for entry in &self.entries {
            if entry.key.trim().is_empty() {
                return Err(DomainError::EmptyFallbackKey);
            }
            if entry.amount.is_sign_negative() {
                return Err(DomainError::NegativePrice {
                    id: entry.key.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Fixed estimate used when neither catalog nor fallback table matched.
pub fn default_amount() -> Decimal {
    Decimal::new(15000, 2) // 150.00
}

/// Internal: which catalog/fallback row a key resolved to.
///
/// `resolve` and `describe` share this lookup so they always agree on which
/// entry (if any) was selected for the same input.
enum Resolved<'a> {
    Entry(&'a CatalogEntry),
    Fallback(&'a FallbackEntry),
    Nothing,
}

/// Service-key → price/description resolver over immutable tables.
#[derive(Debug, Clone)]
pub struct PriceResolver {
    catalog: ServiceCatalog,
    fallback: FallbackTable,
}

impl PriceResolver {
    pub fn new(catalog: ServiceCatalog, fallback: FallbackTable) -> Self {
        Self { catalog, fallback }
    }

    /// Resolve a service key to an estimate.  Total: always returns a
    /// renderable line, never errors, never goes negative.
    #[instrument(skip(self))]
    pub fn resolve(&self, service_key: &str) -> PriceEstimate {
        let normalized = normalize_key(service_key);

        match self.lookup(&normalized) {
            Resolved::Entry(entry) => {
                debug!(id = %entry.id, source = "catalog", "price resolved");
                PriceEstimate {
                    amount: entry.estimated_price(),
                    description: entry.name.clone(),
                    source: PriceSource::Catalog,
                }
            }
            Resolved::Fallback(entry) => {
                debug!(key = %entry.key, source = "fallback", "price resolved");
                PriceEstimate {
                    amount: rescaled(entry.amount),
                    description: service_key.to_owned(),
                    source: PriceSource::Fallback,
                }
            }
            Resolved::Nothing => {
                debug!(source = "default", "price defaulted");
                PriceEstimate {
                    amount: default_amount(),
                    description: service_key.to_owned(),
                    source: PriceSource::Default,
                }
            }
        }
    }

    /// Invoice description for a key: the catalog display name when the
    /// catalog resolves it, otherwise the original key unchanged.
    pub fn describe(&self, service_key: &str) -> String {
        match self.lookup(&normalize_key(service_key)) {
            Resolved::Entry(entry) => entry.name.clone(),
            _ => service_key.to_owned(),
        }
    }

    /// Staged lookup over the already-normalized key.
    fn lookup(&self, normalized: &str) -> Resolved<'_> {
        // An empty key would "fuzzy-match" every name via trivial substring
        // containment; it goes straight to the default.
        if normalized.is_empty() {
            return Resolved::Nothing;
        }

        // Stage 2: exact id match.
        if let Some(entry) = self.catalog.get(normalized) {
            return Resolved::Entry(entry);
        }

        // Stage 3: fuzzy match, first catalog entry wins.  Display names are
        // normalized the same way as keys so that "Oil Change" can contain
        // the key "oil-change".
        if let Some(entry) = self.catalog.iter().find(|e| {
            normalize_key(&e.name).contains(normalized) || normalized.contains(e.id.as_str())
        }) {
            return Resolved::Entry(entry);
        }

        // Stage 4: fallback table, declared order.
        if let Some(entry) = self.fallback.lookup(normalized) {
            return Resolved::Fallback(entry);
        }

        Resolved::Nothing
    }
}

/// Canonical key form: lower-case, runs of whitespace → single hyphen.
///
/// `split_whitespace` also discards leading/trailing whitespace, so
/// `"  Oil   Change "` normalizes to `"oil-change"`.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Force an amount to two decimal places for display consistency.
fn rescaled(amount: Decimal) -> Decimal {
    let mut amount =
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_key("  Oil   Change "), "oil-change");
    }

    #[test]
    fn normalize_keeps_existing_punctuation() {
        // Only whitespace is rewritten; underscores pass through untouched.
        assert_eq!(normalize_key("oil_change"), "oil_change");
    }

    #[test]
    fn rescale_pads_to_two_places() {
        assert_eq!(rescaled(Decimal::new(90, 0)).to_string(), "90.00");
    }

    #[test]
    fn default_amount_is_150() {
        assert_eq!(default_amount().to_string(), "150.00");
    }
}
