//! Built-in table discovery.
//!
//! This module provides [`load_tables`], the single entry-point for loading
//! the catalog/lexicon/fallback tables the engine runs on.  It abstracts
//! over the discovery strategy so callers do not need to know where tables
//! live on disk.
//!
//! # Table resolution order
//!
//! Tables are searched in this priority order, stopping at the first file
//! that exists and parses:
//!
//! 1. **`$TUNEUP_TABLES_FILE`** — environment variable override.  Set this
//!    in `.env` or your shell profile to point at a custom `services.toml`.
//! 2. **`./services.toml`** — relative to the current working directory.
//! 3. **`<executable-dir>/services.toml`** — sibling to the `tuneup`
//!    binary, for installs where the binary ships with its tables.
//!
//! If no file is found, the compiled-in default tables below are used and a
//! `DEBUG` log entry records that.  A file that exists but fails to parse is
//! an error, not a silent fallback — a shop that configured tables wants to
//! know when they are broken.
//!
//! # Built-in defaults
//!
//! The shipped tables cover the common service families of a general auto
//! shop.  Prices are deliberately round estimates; every number here is an
//! *estimate range*, not a quote.  Fallback-table order matters: the first
//! key contained in a normalized input wins, so broad keys ("service") come
//! last.

use std::path::PathBuf;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use tuneup_core::domain::{
    CatalogEntry, DomainError, FallbackTable, Lexicon, ServiceCatalog, TableSet,
};

use crate::table_loader;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load tables using the resolution order described in the module docs.
///
/// # Return value
///
/// - `Ok(tables)` — from the first discovered file, or the built-in
///   defaults when no file was found.
/// - `Err(DomainError)` — a file was discovered but could not be read or
///   parsed, or its contents failed validation.
///
/// # Observability
///
/// - `DEBUG` — which path was checked and whether it was used.
/// - `INFO`  — how many catalog entries were loaded and from where.
/// - `WARN`  — lexicon ids that have no catalog entry (drift, not an error).
#[instrument]
pub fn load_tables() -> Result<TableSet, DomainError> {
    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate tables file");

        if !candidate.is_file() {
            continue;
        }

        let tables = table_loader::load_from_path(&candidate)?;
        info!(
            path = %candidate.display(),
            services = tables.catalog.len(),
            "tables loaded from file"
        );
        warn_on_drift(&tables);
        return Ok(tables);
    }

    debug!("no tables file found; using built-in defaults");
    let tables = builtin_table_set();
    warn_on_drift(&tables);
    Ok(tables)
}

/// Candidate file paths in priority order.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(dir) = std::env::var("TUNEUP_TABLES_FILE") {
        paths.push(PathBuf::from(dir));
    }

    paths.push(PathBuf::from("services.toml"));

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
    {
        paths.push(exe_dir.join("services.toml"));
    }

    paths
}

fn warn_on_drift(tables: &TableSet) {
    let orphans = tables.orphaned_lexicon_ids();
    if !orphans.is_empty() {
        warn!(?orphans, "lexicon references service ids missing from catalog");
    }
}

// ── Built-in defaults ─────────────────────────────────────────────────────────

fn price(units: i64, cents: i64) -> Decimal {
    Decimal::new(units * 100 + cents, 2)
}

/// The shipped default tables.
pub fn builtin_table_set() -> TableSet {
    TableSet::new(builtin_catalog(), builtin_lexicon(), builtin_fallback())
}

/// Default service catalog: id, display name, category, price range.
pub fn builtin_catalog() -> ServiceCatalog {
    let entry = |id, name, category, min, max| CatalogEntry::new(id, name, category, min, max);

    ServiceCatalog::from_entries(vec![
        entry("oil-change", "Oil Change", "maintenance", price(60, 0), price(120, 0)),
        entry("tire-rotation", "Tire Rotation", "maintenance", price(30, 0), price(60, 0)),
        entry(
            "scheduled-maintenance",
            "Scheduled Maintenance",
            "maintenance",
            price(200, 0),
            price(400, 0),
        ),
        entry(
            "engine-diagnostics",
            "Engine Diagnostics",
            "diagnostics",
            price(90, 0),
            price(150, 0),
        ),
        entry("brake-pads-front", "Front Brake Pads", "brakes", price(150, 0), price(300, 0)),
        entry(
            "brake-rotor-replacement",
            "Brake Rotor Replacement",
            "brakes",
            price(250, 0),
            price(500, 0),
        ),
        entry(
            "battery-replacement",
            "Battery Replacement",
            "electrical",
            price(180, 0),
            price(260, 0),
        ),
        entry(
            "alternator-replacement",
            "Alternator Replacement",
            "electrical",
            price(400, 0),
            price(700, 0),
        ),
        entry(
            "starter-replacement",
            "Starter Replacement",
            "electrical",
            price(350, 0),
            price(600, 0),
        ),
        entry("ac-recharge", "A/C Recharge", "climate", price(120, 0), price(200, 0)),
        entry(
            "suspension-inspection",
            "Suspension Inspection",
            "suspension",
            price(80, 0),
            price(140, 0),
        ),
        entry("full-detail", "Full Detail", "detailing", price(150, 0), price(250, 0)),
    ])
}

/// Default keyword lexicon.  Entry order is the classification tie-break
/// order: more specific services come before catch-alls.
pub fn builtin_lexicon() -> Lexicon {
    Lexicon::new()
        .with_service("oil-change", &["oil change", "oil", "lube"])
        .with_service("tire-rotation", &["tire rotation", "rotate tires", "tires"])
        .with_service(
            "engine-diagnostics",
            &["check engine", "engine light", "diagnostic", "diagnostics", "stalling"],
        )
        .with_service("brake-pads-front", &["brake pads", "brake pad", "brakes", "brake"])
        .with_service("brake-rotor-replacement", &["rotors", "rotor", "grinding"])
        .with_service("battery-replacement", &["dead battery", "battery"])
        .with_service("alternator-replacement", &["alternator", "not charging"])
        .with_service("starter-replacement", &["starter"])
        .with_service("ac-recharge", &["air conditioning", "ac", "blowing warm"])
        .with_service("suspension-inspection", &["suspension", "shocks", "struts", "bouncing"])
        .with_service(
            "scheduled-maintenance",
            &["scheduled maintenance", "tune up", "service interval", "maintenance"],
        )
        .with_service("full-detail", &["detailing", "detail", "interior cleaning"])
}

/// Default fallback price table.  Substring containment against the
/// normalized key, first declared key wins — keep short, collision-prone
/// keys ("ac", "service") near the end.
pub fn builtin_fallback() -> FallbackTable {
    FallbackTable::new()
        .with_entry("oil", price(89, 99))
        .with_entry("diagnostic", price(110, 0))
        .with_entry("brake", price(249, 99))
        .with_entry("suspension", price(149, 99))
        .with_entry("battery", price(219, 99))
        .with_entry("starter", price(450, 0))
        .with_entry("alternator", price(550, 0))
        .with_entry("electrical", price(200, 0))
        .with_entry("ac", price(160, 0))
        .with_entry("maintenance", price(299, 99))
        .with_entry("detail", price(199, 99))
        .with_entry("service", price(125, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        builtin_table_set().validate().unwrap();
    }

    #[test]
    fn builtin_lexicon_has_no_orphans() {
        assert!(builtin_table_set().orphaned_lexicon_ids().is_empty());
    }

    #[test]
    fn builtin_catalog_prices_are_ranges() {
        for entry in builtin_catalog().iter() {
            assert!(entry.min_price < entry.max_price, "flat range for {}", entry.id);
        }
    }

    #[test]
    fn fallback_orders_specific_before_broad() {
        // "service" must stay last: nearly any booking phrase mentioning a
        // "service call" should only hit it when nothing else matched.
        let keys: Vec<_> = builtin_fallback().iter().map(|e| e.key.clone()).collect();
        assert_eq!(keys.first().map(String::as_str), Some("oil"));
        assert_eq!(keys.last().map(String::as_str), Some("service"));
    }
}
