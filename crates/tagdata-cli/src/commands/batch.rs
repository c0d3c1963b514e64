//! Batch command - many spec-sheet PDFs into one CSV, one row per document.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, error};

use tagdata_core::models::record::FieldSet;
use tagdata_core::output::Table;
use tagdata_core::pdf::read_document_text;
use tagdata_core::pricing::PriceTable;
use tagdata_core::sheet::SheetParser;

use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input spec-sheet PDFs
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output CSV path (semicolon-delimited)
    #[arg(short, long)]
    output: PathBuf,

    /// Price table CSV (overrides the configured path)
    #[arg(long)]
    price_table: Option<PathBuf>,

    /// Skip documents that fail to load instead of aborting
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    println!(
        "{} Processing {} files",
        style("ℹ").blue(),
        args.inputs.len()
    );

    let price_table_path = args
        .price_table
        .as_deref()
        .unwrap_or(&config.data.price_table);
    let prices = PriceTable::from_path(price_table_path);

    let parser = SheetParser::new().with_barcode_validation(config.extraction.validate_barcode);

    let mut field_sets: Vec<FieldSet> = Vec::with_capacity(args.inputs.len());
    let mut failures = 0usize;

    for input in &args.inputs {
        match read_document_text(input) {
            Ok(text) => {
                let sheet = parser.parse(&text, &prices);
                field_sets.push(sheet.fields);
            }
            Err(e) => {
                failures += 1;
                error!("failed to read {}: {}", input.display(), e);
                if !args.continue_on_error {
                    anyhow::bail!("failed to read {}: {}", input.display(), e);
                }
                eprintln!(
                    "{} Skipping {}: {}",
                    style("✗").red(),
                    input.display(),
                    e
                );
            }
        }
    }

    if field_sets.is_empty() {
        anyhow::bail!("no documents could be processed");
    }

    let table = Table::assemble(&field_sets);
    table.write_to_path(&args.output)?;

    println!(
        "{} Saved {} rows to {} ({} skipped)",
        style("✓").green(),
        table.len(),
        args.output.display(),
        failures
    );

    debug!("total processing time: {:?}", start.elapsed());
    Ok(())
}
