//! The field-placement manifest format.
//!
//! Geometry keys are optional at the JSON level: a missing key is a
//! validation finding, not a parse error, so the loader must accept it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Top-level manifest: font references plus an ordered list of placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Font references; both `regular` and `bold` must be declared.
    #[serde(default)]
    pub fonts: Option<Fonts>,

    /// Field placements, in render order.
    #[serde(default)]
    pub fields: Vec<FieldPlacement>,
}

/// The `fonts` block of the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fonts {
    #[serde(default)]
    pub regular: Option<serde_json::Value>,
    #[serde(default)]
    pub bold: Option<serde_json::Value>,
}

/// One placeholder placement: which template element it fills and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPlacement {
    /// Template element id this field renders into.
    #[serde(default)]
    pub id: String,

    /// Position, in template coordinate units.
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,

    /// Box size; must be strictly positive.
    #[serde(default)]
    pub w: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,

    /// Font size.
    #[serde(default)]
    pub size: Option<f64>,

    /// Font key: `regular` or `bold`.
    #[serde(default)]
    pub font: Option<String>,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TemplateError::Manifest(e.to_string()))?;
        Self::parse_str(&content)
    }

    /// Parse a manifest from a JSON string.
    pub fn parse_str(json: &str) -> Result<Self, TemplateError> {
        serde_json::from_str(json).map_err(|e| TemplateError::Manifest(e.to_string()))
    }
}
