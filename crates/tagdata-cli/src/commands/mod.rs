//! CLI subcommands.

pub mod batch;
pub mod extract;
pub mod validate;

use std::path::Path;

use tagdata_core::models::TagdataConfig;

/// Load the run configuration, falling back to defaults when no file is
/// given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<TagdataConfig> {
    match config_path {
        Some(path) => Ok(TagdataConfig::from_file(Path::new(path))?),
        None => Ok(TagdataConfig::default()),
    }
}
