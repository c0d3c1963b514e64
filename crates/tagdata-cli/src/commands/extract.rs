//! Extract command - one spec-sheet PDF to one canonical CSV row.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use tagdata_core::output::Table;
use tagdata_core::pdf::read_document_text;
use tagdata_core::pricing::PriceTable;
use tagdata_core::sheet::SheetParser;

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input spec-sheet PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output CSV path (semicolon-delimited)
    #[arg(short, long)]
    output: PathBuf,

    /// Price table CSV (overrides the configured path)
    #[arg(long)]
    price_table: Option<PathBuf>,

    /// Show per-field extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("processing file: {}", args.input.display());

    let price_table_path = args
        .price_table
        .as_deref()
        .unwrap_or(&config.data.price_table);
    let prices = PriceTable::from_path(price_table_path);

    let text = read_document_text(&args.input)?;

    let parser = SheetParser::new().with_barcode_validation(config.extraction.validate_barcode);
    let sheet = parser.parse(&text, &prices);

    if args.show_warnings && !sheet.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &sheet.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let table = Table::assemble(&[sheet.fields]);
    table.write_to_path(&args.output)?;

    println!(
        "{} Saved: {}",
        style("✓").green(),
        args.output.display()
    );

    debug!("total processing time: {:?}", start.elapsed());
    Ok(())
}
