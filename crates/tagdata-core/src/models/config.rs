//! Configuration structures for an extraction run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the tagdata pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagdataConfig {
    /// Reference data configuration.
    pub data: DataConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for TagdataConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Locations of reference tables, loaded once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the currency price table CSV.
    pub price_table: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            price_table: PathBuf::from("data/price_table.csv"),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Enable EAN-13 checksum validation for extracted barcodes.
    pub validate_barcode: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_barcode: true,
        }
    }
}

impl TagdataConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TagdataConfig::default();
        assert!(config.extraction.validate_barcode);
        assert_eq!(config.data.price_table, PathBuf::from("data/price_table.csv"));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = TagdataConfig::default();
        config.extraction.validate_barcode = false;
        config.save(&path).unwrap();

        let loaded = TagdataConfig::from_file(&path).unwrap();
        assert!(!loaded.extraction.validate_barcode);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TagdataConfig =
            serde_json::from_str(r#"{"extraction": {"validate_barcode": false}}"#).unwrap();
        assert!(!config.extraction.validate_barcode);
        assert_eq!(config.data.price_table, PathBuf::from("data/price_table.csv"));
    }
}
