//! Intake Service - main application orchestrator.
//!
//! This service coordinates one inbound submission:
//! 1. Classify the free-text message against the lexicon
//! 2. Resolve a price for the winning service id (or the raw message)
//!
//! The classifier never calls the price resolver and vice versa — they
//! compose only here, through the caller.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::TableSource,
    domain::{Classification, Classifier, PriceEstimate, PriceResolver},
    error::TuneupResult,
};

/// Result of running one message through the full intake pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeOutcome {
    /// What the classifier made of the message.
    pub classification: Classification,
    /// Estimate for the classified service — or for the raw message itself
    /// when nothing classified, so a quote line is always renderable.
    pub estimate: PriceEstimate,
}

/// Main intake service.
///
/// Orchestrates the classify-then-quote workflow over tables supplied by
/// the injected [`TableSource`].
pub struct IntakeService {
    tables: Box<dyn TableSource>,
}

impl IntakeService {
    /// Create a new intake service with the given table source.
    pub fn new(tables: Box<dyn TableSource>) -> Self {
        Self { tables }
    }

    /// Run the full pipeline on one inbound message.
    ///
    /// This is the main use case — the booking pipeline calls this once per
    /// submission to auto-tag the message and populate its estimate fields.
    #[instrument(skip_all, fields(message_len = message.len()))]
    pub fn intake(&self, message: &str) -> TuneupResult<IntakeOutcome> {
        let tables = self.tables.tables()?;

        let classifier = Classifier::new(&tables.lexicon);
        let resolver = PriceResolver::new(tables.catalog, tables.fallback);

        let classification = classifier.classify(message);

        let estimate = match classification.service_id() {
            Some(id) => {
                info!(service = %id, score = classification.score(), "message classified");
                resolver.resolve(id.as_str())
            }
            None => {
                // No match: quote the customer's own words so the line item
                // is still renderable and a human can review it.
                debug!("no classification; quoting raw message");
                resolver.resolve(message)
            }
        };

        info!(
            amount = %estimate.amount,
            source = %estimate.source,
            "estimate resolved"
        );

        Ok(IntakeOutcome {
            classification,
            estimate,
        })
    }

    /// Classify a message without quoting it.
    pub fn classify_message(&self, message: &str) -> TuneupResult<Classification> {
        let tables = self.tables.tables()?;
        Ok(Classifier::new(&tables.lexicon).classify(message))
    }

    /// Resolve a price for a service key without classifying anything.
    pub fn quote(&self, service_key: &str) -> TuneupResult<PriceEstimate> {
        let tables = self.tables.tables()?;
        Ok(PriceResolver::new(tables.catalog, tables.fallback).resolve(service_key))
    }

    /// Invoice description for a service key.
    pub fn describe(&self, service_key: &str) -> TuneupResult<String> {
        let tables = self.tables.tables()?;
        Ok(PriceResolver::new(tables.catalog, tables.fallback).describe(service_key))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        CatalogEntry, FallbackTable, Lexicon, PriceSource, ServiceCatalog, TableSet,
    };
    use crate::error::TuneupError;

    mock! {
        Tables {}

        impl TableSource for Tables {
            fn tables(&self) -> TuneupResult<TableSet>;
        }
    }

    fn fixture_tables() -> TableSet {
        TableSet::new(
            ServiceCatalog::new().with_entry(CatalogEntry::new(
                "oil-change",
                "Oil Change",
                "maintenance",
                Decimal::new(60, 0),
                Decimal::new(120, 0),
            )),
            Lexicon::new().with_service("oil-change", &["oil change", "oil"]),
            FallbackTable::new().with_entry("brake", Decimal::new(24999, 2)),
        )
    }

    #[test]
    fn intake_classifies_then_quotes() {
        let mut source = MockTables::new();
        source.expect_tables().returning(|| Ok(fixture_tables()));

        let service = IntakeService::new(Box::new(source));
        let outcome = service.intake("time for an oil change").unwrap();

        assert!(outcome.classification.is_match());
        assert_eq!(outcome.estimate.amount.to_string(), "90.00");
        assert_eq!(outcome.estimate.description, "Oil Change");
        assert_eq!(outcome.estimate.source, PriceSource::Catalog);
    }

    #[test]
    fn intake_quotes_raw_message_on_no_match() {
        let mut source = MockTables::new();
        source.expect_tables().returning(|| Ok(fixture_tables()));

        let service = IntakeService::new(Box::new(source));
        let outcome = service.intake("grinding brake noise").unwrap();

        assert_eq!(outcome.classification, Classification::NoMatch);
        // Unclassified messages still get a fallback estimate.
        assert_eq!(outcome.estimate.source, PriceSource::Fallback);
        assert_eq!(outcome.estimate.description, "grinding brake noise");
    }

    #[test]
    fn intake_propagates_table_source_failure() {
        let mut source = MockTables::new();
        source.expect_tables().returning(|| {
            Err(TuneupError::Application(
                crate::application::ApplicationError::StoreLockError,
            ))
        });

        let service = IntakeService::new(Box::new(source));
        assert!(service.intake("anything").is_err());
    }
}
