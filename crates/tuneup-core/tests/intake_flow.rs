//! Integration tests for tuneup-core.
//!
//! Exercises the full classify-then-quote pipeline through the application
//! services with a fixture table source, the way the booking pipeline calls
//! the engine in production.

use rust_decimal::Decimal;

use tuneup_core::{
    application::{CatalogService, IntakeService, ports::TableSource},
    domain::{
        CatalogEntry, Classification, FallbackTable, Lexicon, PriceSource, ServiceCatalog,
        TableSet,
    },
    error::TuneupResult,
};

/// Fixed in-test table source; adapters provide the production equivalent.
struct FixtureTables(TableSet);

impl TableSource for FixtureTables {
    fn tables(&self) -> TuneupResult<TableSet> {
        Ok(self.0.clone())
    }
}

fn tables() -> TableSet {
    let catalog = ServiceCatalog::new()
        .with_entry(CatalogEntry::new(
            "oil-change",
            "Oil Change",
            "maintenance",
            Decimal::new(60, 0),
            Decimal::new(120, 0),
        ))
        .with_entry(CatalogEntry::new(
            "brake-pads-front",
            "Front Brake Pads",
            "brakes",
            Decimal::new(150, 0),
            Decimal::new(300, 0),
        ))
        .with_entry(CatalogEntry::new(
            "ac-recharge",
            "A/C Recharge",
            "climate",
            Decimal::new(120, 0),
            Decimal::new(200, 0),
        ));

    let lexicon = Lexicon::new()
        .with_service("oil-change", &["oil change", "oil"])
        .with_service("brake-pads-front", &["brake pad", "brake pads"])
        .with_service("ac-recharge", &["air conditioning", "ac"]);

    let fallback = FallbackTable::new()
        .with_entry("oil", Decimal::new(8999, 2))
        .with_entry("diagnostic", Decimal::new(11000, 2))
        .with_entry("brake", Decimal::new(24999, 2))
        .with_entry("service", Decimal::new(12500, 2));

    TableSet::new(catalog, lexicon, fallback)
}

fn intake_service() -> IntakeService {
    IntakeService::new(Box::new(FixtureTables(tables())))
}

#[test]
fn full_intake_workflow() {
    let service = intake_service();

    let outcome = service
        .intake("My car needs an oil change and new brake pads")
        .unwrap();

    // "oil change" (2) + "oil" (1) = 3 beats "brake pads" (2).
    assert_eq!(
        outcome.classification,
        Classification::Match {
            service_id: "oil-change".into(),
            score: 3,
        }
    );

    // The winning id feeds price resolution: midpoint of 60..120.
    assert_eq!(outcome.estimate.amount.to_string(), "90.00");
    assert_eq!(outcome.estimate.description, "Oil Change");
    assert_eq!(outcome.estimate.source, PriceSource::Catalog);
}

#[test]
fn intake_empty_message() {
    let outcome = intake_service().intake("").unwrap();
    assert_eq!(outcome.classification, Classification::NoMatch);
    // Nothing to classify and nothing to price: fixed default.
    assert_eq!(outcome.estimate.amount.to_string(), "150.00");
    assert_eq!(outcome.estimate.source, PriceSource::Default);
}

#[test]
fn intake_is_referentially_transparent() {
    let service = intake_service();
    let message = "squealing brakes and maybe an oil change?";
    let first = service.intake(message).unwrap();
    for _ in 0..5 {
        assert_eq!(service.intake(message).unwrap(), first);
    }
}

#[test]
fn quote_loose_key_against_catalog() {
    let service = intake_service();

    // Near-miss human phrase: normalization makes it an exact id hit.
    let estimate = service.quote("Oil Change").unwrap();
    assert_eq!(estimate.amount.to_string(), "90.00");
    assert_eq!(estimate.source, PriceSource::Catalog);

    // Unknown key with no fallback family: specified default, key echoed.
    let estimate = service.quote("xyz-unknown-service").unwrap();
    assert_eq!(estimate.amount.to_string(), "150.00");
    assert_eq!(estimate.description, "xyz-unknown-service");
    assert_eq!(estimate.source, PriceSource::Default);
}

#[test]
fn quote_and_describe_agree() {
    let service = intake_service();
    for key in ["oil-change", "Front Brake", "diagnostic check", "???"] {
        assert_eq!(
            service.describe(key).unwrap(),
            service.quote(key).unwrap().description
        );
    }
}

#[test]
fn catalog_service_queries() {
    let service = CatalogService::new(Box::new(FixtureTables(tables())));

    let entry = service.get("ac-recharge").unwrap();
    assert_eq!(entry.name, "A/C Recharge");

    assert!(service.get("no-such-service").is_err());

    let all = service.list().unwrap();
    assert_eq!(all.len(), 3);
    // Catalog order is a contract; list must preserve it.
    assert_eq!(all[0].id.as_str(), "oil-change");

    assert_eq!(
        service.categories().unwrap(),
        vec!["maintenance", "brakes", "climate"]
    );
    assert_eq!(service.by_category("brakes").unwrap().len(), 1);
}
