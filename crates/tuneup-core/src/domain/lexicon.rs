//! Keyword lexicon: service id → indicator phrases.
//!
//! The lexicon tells the classifier which phrases indicate which service.
//! It is maintained independently of the catalog (often by different hands),
//! so a lexicon entry MAY reference a service id the catalog does not know —
//! classification must tolerate that rather than fail.
//!
//! ## Ordering is a contract
//!
//! Entries keep declaration order, and classification tie-breaks resolve in
//! that order (see [`crate::domain::classify`]).  This is deliberate: naive
//! map iteration order is not a reliable contract across reimplementations,
//! so the lexicon is a `Vec`, never a `HashMap`.

use serde::{Deserialize, Serialize};

use crate::domain::{catalog::ServiceId, error::DomainError};

/// Phrases indicating one service.
///
/// Each phrase is one-or-more whitespace-separated words.  Multi-word
/// phrases only match when all words occur contiguously in order, and they
/// score proportionally to their word count — longer, more specific phrases
/// outweigh short generic ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub service_id: ServiceId,
    pub phrases: Vec<String>,
}

impl LexiconEntry {
    pub fn new(service_id: impl Into<ServiceId>, phrases: Vec<String>) -> Self {
        Self {
            service_id: service_id.into(),
            phrases,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.service_id.as_str().is_empty() {
            return Err(DomainError::EmptyServiceId);
        }

        if self.phrases.is_empty() {
            return Err(DomainError::EmptyPhraseList {
                id: self.service_id.to_string(),
            });
        }

        if self.phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(DomainError::BlankKeywordPhrase {
                id: self.service_id.to_string(),
            });
        }

        Ok(())
    }
}

/// Ordered keyword lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry (maintains declaration order).
    pub fn push(&mut self, entry: LexiconEntry) {
        self.entries.push(entry);
    }

    /// Fluent helper for building a lexicon inline.
    pub fn with_service(mut self, service_id: impl Into<ServiceId>, phrases: &[&str]) -> Self {
        self.push(LexiconEntry::new(
            service_id,
            phrases.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every entry plus lexicon-level invariants (unique ids).
    ///
    /// Referencing a service id absent from the catalog is *not* checked
    /// here: catalog and lexicon are independently maintained tables.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.entries {
            entry.validate()?;
            if !seen.insert(entry.service_id.as_str()) {
                return Err(DomainError::DuplicateServiceId {
                    id: entry.service_id.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a LexiconEntry;
    type IntoIter = std::slice::Iter<'a, LexiconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
