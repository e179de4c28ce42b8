//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.  Note that
//! classification and price resolution never error — the variants here are
//! all about *getting at the tables*, not using them.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The table source could not produce a snapshot.
    #[error("Table source unavailable: {reason}")]
    TableSourceUnavailable { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Table store error")]
    StoreLockError,

    /// A read-side catalog query asked for an id the catalog lacks.
    ///
    /// Only `CatalogService::get` can hit this; price resolution degrades
    /// to fallback/default instead of failing.
    #[error("Unknown service id: {id}")]
    UnknownService { id: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TableSourceUnavailable { reason } => vec![
                format!("Table supply failed: {}", reason),
                "Check the table file configured via TUNEUP_TABLES_FILE".into(),
                "Or fall back to the built-in tables by unsetting it".into(),
            ],
            Self::StoreLockError => vec![
                "The table store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::UnknownService { id } => vec![
                format!("No catalog entry with id: {}", id),
                "List known services: tuneup list".into(),
                "Use 'tuneup quote' for loose keys — it never fails".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TableSourceUnavailable { .. } => ErrorCategory::Configuration,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::UnknownService { .. } => ErrorCategory::NotFound,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
