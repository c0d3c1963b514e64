//! Validate command - cross-check a tag template SVG against its manifest.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use tagdata_core::template::{validate_manifest, Manifest, TemplateIds};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Tag template SVG
    #[arg(required = true)]
    template: PathBuf,

    /// Field-placement manifest JSON
    #[arg(required = true)]
    manifest: PathBuf,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let template = TemplateIds::from_path(&args.template)?;
    let manifest = Manifest::from_path(&args.manifest)?;

    debug!(
        "validating {} manifest fields against {} template ids",
        manifest.fields.len(),
        template.len()
    );

    let findings = validate_manifest(&template, &manifest);

    if findings.is_empty() {
        println!(
            "{} Validation passed: template and manifest are consistent.",
            style("✓").green()
        );
        Ok(())
    } else {
        println!(
            "{} Validation failed ({} issues):",
            style("✗").red(),
            findings.len()
        );
        for finding in &findings {
            println!(" - {}", finding);
        }
        std::process::exit(1);
    }
}
