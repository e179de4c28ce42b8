//! Implementation of the `tuneup quote` command.
//!
//! Price resolution is total: any service key — catalog id, loose phrase,
//! or garbage — produces a renderable estimate, so this command never fails
//! on its input.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use tuneup_core::{
    application::IntakeService,
    domain::{PriceEstimate, QuoteRecord},
};

use crate::{
    cli::{OutputFormat, QuoteArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape for quote results.
#[derive(Debug, Serialize)]
struct QuoteReport {
    reference: Uuid,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    estimate: PriceEstimate,
}

/// Execute the `tuneup quote` command.
#[instrument(skip_all, fields(service = %args.service))]
pub fn execute(
    args: QuoteArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = super::table_store(&config)?;
    let service = IntakeService::new(Box::new(store));

    let estimate = service.quote(&args.service)?;
    let record = QuoteRecord::new(estimate);

    info!(
        reference = %record.uuid,
        amount = %record.estimate.amount,
        source = %record.estimate.source,
        "quote generated"
    );

    if output.format() == OutputFormat::Json {
        let report = QuoteReport {
            reference: record.uuid,
            generated_at: Utc::now(),
            estimate: record.estimate,
        };
        println!("{}", super::to_json(&report)?);
        return Ok(());
    }

    render_human(&output, &record)?;
    Ok(())
}

fn render_human(output: &OutputManager, record: &QuoteRecord) -> CliResult<()> {
    output.success(&format!(
        "Estimated {} for '{}'",
        output.currency(record.estimate.amount),
        record.estimate.description,
    ))?;
    super::classify::print_estimate(output, &record.estimate)?;
    output.detail("reference", &record.uuid.to_string())?;
    Ok(())
}
