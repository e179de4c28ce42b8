// ============================================================================
// domain/error.rs - TABLE VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Classification and price resolution are total functions and never raise;
/// every variant here is a *table* problem, caught when a catalog, lexicon,
/// or fallback table is validated at load time.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Catalog errors
    // ========================================================================
    #[error("Service id cannot be empty")]
    EmptyServiceId,

    #[error("Invalid service id '{id}': {reason}")]
    InvalidServiceId { id: String, reason: String },

    #[error("Duplicate service id: {id}")]
    DuplicateServiceId { id: String },

    #[error("Service '{id}' has an empty display name")]
    EmptyServiceName { id: String },

    #[error("Service '{id}' has a negative price")]
    NegativePrice { id: String },

    #[error("Service '{id}' price range is inverted: min {min} > max {max}")]
    InvalidPriceRange {
        id: String,
        min: String,
        max: String,
    },

    // ========================================================================
    // Lexicon errors
    // ========================================================================
    #[error("Lexicon entry '{id}' lists no keyword phrases")]
    EmptyPhraseList { id: String },

    #[error("Lexicon entry '{id}' contains a blank keyword phrase")]
    BlankKeywordPhrase { id: String },

    // ========================================================================
    // Fallback table errors
    // ========================================================================
    #[error("Fallback table contains an empty key")]
    EmptyFallbackKey,

    // ========================================================================
    // Record errors
    // ========================================================================
    #[error("Invalid quote record: {reason}")]
    InvalidQuoteRecord { reason: String },

    // ========================================================================
    // Structural errors
    // ========================================================================
    #[error("Invalid table data: {0}")]
    InvalidTables(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyServiceId => vec![
                "Every catalog and lexicon entry needs a service id".into(),
                "Use a lower-case hyphenated slug, e.g. oil-change".into(),
            ],
            Self::InvalidServiceId { id, reason } => vec![
                format!("Service id '{}' is invalid: {}", id, reason),
                "Ids must be lower-case alphanumeric words joined by hyphens".into(),
                "Examples: oil-change, brake-pads-front, ac-recharge".into(),
            ],
            Self::DuplicateServiceId { id } => vec![
                format!("The id '{}' appears more than once", id),
                "Merge the duplicate rows or rename one of them".into(),
            ],
            Self::InvalidPriceRange { id, min, max } => vec![
                format!("Service '{}' declares min {} above max {}", id, min, max),
                "Swap the bounds or correct the typo in the table source".into(),
            ],
            Self::EmptyPhraseList { id } => vec![
                format!("Lexicon entry '{}' has no phrases and can never match", id),
                "Add at least one keyword phrase, or remove the entry".into(),
            ],
            Self::InvalidTables(msg) => vec![
                "Check your table configuration".into(),
                format!("Details: {}", msg),
            ],
            _ => vec!["Check the table source for the offending row".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidQuoteRecord { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
