//! Implementation of the `tuneup classify` command.
//!
//! Responsibility: run a message through the classifier (and optionally the
//! full intake pipeline with `--quote`), then display the result.

use serde::Serialize;
use tracing::{debug, instrument};

use tuneup_core::{
    application::IntakeService,
    domain::{Classification, PriceEstimate},
};

use crate::{
    cli::{ClassifyArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape for classify results.
#[derive(Debug, Serialize)]
struct ClassifyReport {
    matched: bool,
    service_id: Option<String>,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    estimate: Option<PriceEstimate>,
}

/// Execute the `tuneup classify` command.
#[instrument(skip_all, fields(quote = args.quote))]
pub fn execute(
    args: ClassifyArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = super::table_store(&config)?;
    let service = IntakeService::new(Box::new(store));

    let (classification, estimate) = if args.quote {
        let outcome = service.intake(&args.message)?;
        (outcome.classification, Some(outcome.estimate))
    } else {
        (service.classify_message(&args.message)?, None)
    };

    debug!(matched = classification.is_match(), "classification complete");

    if output.format() == OutputFormat::Json {
        let report = ClassifyReport {
            matched: classification.is_match(),
            service_id: classification.service_id().map(|id| id.to_string()),
            score: classification.score(),
            estimate,
        };
        // JSON goes straight to stdout so it stays parseable in pipes.
        println!("{}", super::to_json(&report)?);
        return Ok(());
    }

    match &classification {
        Classification::Match { service_id, score } => {
            output.success(&format!("Classified as '{service_id}'"))?;
            output.detail("service", service_id.as_str())?;
            output.detail("score", &score.to_string())?;
        }
        Classification::NoMatch => {
            // A normal result, not an error: the message simply contains no
            // known service vocabulary.
            output.warning("No catalog service matched this message")?;
        }
    }

    if let Some(estimate) = estimate {
        print_estimate(&output, &estimate)?;
    }

    Ok(())
}

/// Shared estimate rendering for classify --quote and quote.
pub(super) fn print_estimate(output: &OutputManager, estimate: &PriceEstimate) -> CliResult<()> {
    output.detail("estimate", &output.currency(estimate.amount))?;
    output.detail("description", &estimate.description)?;
    output.detail("source", &estimate.source.to_string())?;

    if estimate.source != tuneup_core::domain::PriceSource::Catalog {
        output.info("Estimate is low-confidence; flag for human review")?;
    }

    Ok(())
}
