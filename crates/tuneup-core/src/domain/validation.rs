use crate::domain::{
    catalog::ServiceCatalog, error::DomainError, lexicon::Lexicon, pricing::FallbackTable,
    tables::TableSet,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_catalog(catalog: &ServiceCatalog) -> Result<(), DomainError> {
        catalog.validate()
    }

    pub fn validate_lexicon(lexicon: &Lexicon) -> Result<(), DomainError> {
        lexicon.validate()
    }

    pub fn validate_fallback(fallback: &FallbackTable) -> Result<(), DomainError> {
        fallback.validate()
    }

    pub fn validate_tables(tables: &TableSet) -> Result<(), DomainError> {
        tables.validate()
    }
}
