//! Implementation of the `tuneup list` command.

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: crate::config::AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    use tuneup_core::application::CatalogService;

    let store = Box::new(super::table_store(&config)?);
    let service = CatalogService::new(store);

    let entries = match &args.category {
        Some(category) => service.by_category(category)?,
        None => service.list()?,
    };

    match args.format {
        ListFormat::Table => {
            output.header("Service Catalog:")?;
            for entry in &entries {
                output.print(&format!(
                    "  {:<24} {:<26} {:<12} {} – {}  (est. {})",
                    entry.id,
                    entry.name,
                    entry.category,
                    output.currency(entry.min_price),
                    output.currency(entry.max_price),
                    output.currency(entry.estimated_price()),
                ))?;
            }
            if entries.is_empty() {
                output.warning("No services in this category")?;
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            println!("{}", super::to_json(&entries)?);
        }

        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.id);
            }
        }

        ListFormat::Csv => {
            println!("id,name,category,min_price,max_price");
            for entry in &entries {
                println!(
                    "{},{},{},{},{}",
                    entry.id, entry.name, entry.category, entry.min_price, entry.max_price
                );
            }
        }
    }

    Ok(())
}
