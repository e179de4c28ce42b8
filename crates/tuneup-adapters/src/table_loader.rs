//! TOML-based table loader.
//!
//! Parses a `services.toml` manifest into the domain [`TableSet`] the
//! engine runs on.  Configuration-load is an external collaborator concern;
//! the core never reads files itself.
//!
//! # `services.toml` format
//!
//! ```toml
//! [[catalog]]
//! id        = "oil-change"     # unique slug
//! name      = "Oil Change"
//! category  = "maintenance"
//! min_price = "60.00"          # strings keep decimal amounts exact
//! max_price = "120.00"
//!
//! [[lexicon]]
//! service = "oil-change"
//! phrases = ["oil change", "oil"]
//!
//! [[fallback]]
//! key   = "oil"
//! price = "89.99"
//! ```
//!
//! Array-of-table order is preserved end-to-end: catalog order drives fuzzy
//! price resolution, lexicon order drives classification tie-breaks, and
//! fallback order drives family selection.  Reordering the file changes
//! behavior by design.
//!
//! # Error handling
//!
//! A manifest that cannot be read or parsed is a hard error.  An individual
//! row that fails domain validation is **skipped with a warning** so one
//! typo does not take the whole catalog down; the assembled tables are then
//! validated as a set (duplicates across surviving rows still fail).

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use tuneup_core::domain::{
    CatalogEntry, DomainError, FallbackTable, Lexicon, LexiconEntry, ServiceCatalog, TableSet,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `services.toml` file.
///
/// All fields map 1-to-1 to TOML sections; see the module-level docs for the
/// full format.
#[derive(Debug, Deserialize, Clone)]
pub struct TablesManifest {
    /// `[[catalog]]` rows, in declaration order.
    #[serde(default)]
    pub catalog: Vec<CatalogRow>,
    /// `[[lexicon]]` rows, in declaration order.
    #[serde(default)]
    pub lexicon: Vec<LexiconRow>,
    /// `[[fallback]]` rows, in declaration order.
    #[serde(default)]
    pub fallback: Vec<FallbackRow>,
}

/// One `[[catalog]]` row.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    /// Omitted categories land in "general".
    pub category: Option<String>,
    pub min_price: Decimal,
    pub max_price: Decimal,
}

/// One `[[lexicon]]` row.
#[derive(Debug, Deserialize, Clone)]
pub struct LexiconRow {
    /// Service id the phrases indicate.  May name an id the catalog does
    /// not carry; that is drift, not an error.
    pub service: String,
    pub phrases: Vec<String>,
}

/// One `[[fallback]]` row.
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackRow {
    pub key: String,
    pub price: Decimal,
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load and validate tables from a manifest file.
#[instrument]
pub fn load_from_path(path: &Path) -> Result<TableSet, DomainError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidTables(format!("cannot read {}: {}", path.display(), e))
    })?;
    load_from_str(&raw)
}

/// Load and validate tables from manifest text.
pub fn load_from_str(raw: &str) -> Result<TableSet, DomainError> {
    let manifest: TablesManifest = toml::from_str(raw)
        .map_err(|e| DomainError::InvalidTables(format!("manifest parse error: {e}")))?;
    tables_from_manifest(manifest)
}

/// Convert a parsed manifest into validated domain tables.
pub fn tables_from_manifest(manifest: TablesManifest) -> Result<TableSet, DomainError> {
    let mut catalog = ServiceCatalog::new();
    for row in manifest.catalog {
        let entry = CatalogEntry::new(
            row.id,
            row.name,
            row.category.unwrap_or_else(|| "general".to_owned()),
            row.min_price,
            row.max_price,
        );
        match entry.validate() {
            Ok(()) => catalog.push(entry),
            Err(e) => warn!(id = %entry_label(&entry), error = %e, "skipping catalog row"),
        }
    }

    let mut lexicon = Lexicon::new();
    for row in manifest.lexicon {
        let entry = LexiconEntry::new(row.service, row.phrases);
        match entry.validate() {
            Ok(()) => lexicon.push(entry),
            Err(e) => warn!(service = %entry.service_id, error = %e, "skipping lexicon row"),
        }
    }

    let mut fallback = FallbackTable::new();
    for row in manifest.fallback {
        if row.key.trim().is_empty() || row.price.is_sign_negative() {
            warn!(key = %row.key, "skipping fallback row");
            continue;
        }
        fallback = fallback.with_entry(row.key, row.price);
    }

    debug!(
        services = catalog.len(),
        lexicon_entries = lexicon.len(),
        fallback_entries = fallback.len(),
        "manifest converted"
    );

    let tables = TableSet::new(catalog, lexicon, fallback);
    tables.validate()?;
    Ok(tables)
}

fn entry_label(entry: &CatalogEntry) -> String {
    if entry.id.as_str().is_empty() {
        format!("<unnamed:{}>", entry.name)
    } else {
        entry.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const MANIFEST: &str = r#"
        [[catalog]]
        id        = "oil-change"
        name      = "Oil Change"
        category  = "maintenance"
        min_price = "60.00"
        max_price = "120.00"

        [[catalog]]
        id        = "brake-pads-front"
        name      = "Front Brake Pads"
        min_price = "150.00"
        max_price = "300.00"

        [[lexicon]]
        service = "oil-change"
        phrases = ["oil change", "oil"]

        [[fallback]]
        key   = "oil"
        price = "89.99"
    "#;

    #[test]
    fn parses_complete_manifest() {
        let tables = load_from_str(MANIFEST).unwrap();

        assert_eq!(tables.catalog.len(), 2);
        let entry = tables.catalog.get("oil-change").unwrap();
        assert_eq!(entry.name, "Oil Change");
        assert_eq!(entry.min_price.to_string(), "60.00");

        // Missing category defaults.
        assert_eq!(
            tables.catalog.get("brake-pads-front").unwrap().category,
            "general"
        );

        assert_eq!(tables.lexicon.len(), 1);
        assert_eq!(tables.fallback.len(), 1);
    }

    #[test]
    fn preserves_declaration_order() {
        let tables = load_from_str(MANIFEST).unwrap();
        let ids: Vec<_> = tables.catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["oil-change", "brake-pads-front"]);
    }

    #[test]
    fn skips_invalid_rows_but_keeps_rest() {
        let raw = r#"
            [[catalog]]
            id        = "Bad Id"
            name      = "Broken"
            min_price = "10.00"
            max_price = "5.00"

            [[catalog]]
            id        = "oil-change"
            name      = "Oil Change"
            min_price = "60.00"
            max_price = "120.00"
        "#;
        let tables = load_from_str(raw).unwrap();
        assert_eq!(tables.catalog.len(), 1);
        assert!(tables.catalog.get("oil-change").is_some());
    }

    #[test]
    fn duplicate_ids_across_valid_rows_fail() {
        let raw = r#"
            [[catalog]]
            id        = "oil-change"
            name      = "Oil Change"
            min_price = "60.00"
            max_price = "120.00"

            [[catalog]]
            id        = "oil-change"
            name      = "Oil Change Again"
            min_price = "60.00"
            max_price = "120.00"
        "#;
        assert!(matches!(
            load_from_str(raw),
            Err(DomainError::DuplicateServiceId { .. })
        ));
    }

    #[test]
    fn rejects_unparseable_manifest() {
        assert!(matches!(
            load_from_str("not [ valid { toml"),
            Err(DomainError::InvalidTables(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();

        let tables = load_from_path(file.path()).unwrap();
        assert_eq!(tables.catalog.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_path(Path::new("/nonexistent/services.toml")).is_err());
    }
}
