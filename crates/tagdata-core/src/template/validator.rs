//! Cross-validation of a template's element ids against a field manifest.
//!
//! Checks accumulate: the report always covers everything wrong with the
//! pair, never just the first issue.

use std::collections::BTreeSet;
use std::fmt;

use super::manifest::Manifest;
use super::svg::TemplateIds;

/// Template page bounds, in template coordinate units.
pub const PAGE_WIDTH: f64 = 130.394;
pub const PAGE_HEIGHT: f64 = 325.984;

/// Prefix marking template elements as data placeholders.
pub const VAR_PREFIX: &str = "var_";

/// One structural or semantic mismatch between template and manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// The `fonts` block does not declare both `regular` and `bold`.
    FontsIncomplete,
    /// A manifest field references an id absent from the template.
    MissingInTemplate { id: String },
    /// A required placement key is absent from a field entry.
    MissingKey { id: String, key: &'static str },
    /// A field's position lies outside the page bounds.
    OutOfPage { id: String, x: f64, y: f64 },
    /// A field's box has a non-positive width or height.
    NonPositiveSize { id: String, w: f64, h: f64 },
    /// A field's font key is neither `regular` nor `bold`.
    BadFont { id: String, font: Option<String> },
    /// A `var_` element in the template has no manifest entry.
    ExtraInTemplate { id: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::FontsIncomplete => write!(f, "fonts.regular / fonts.bold missing"),
            Finding::MissingInTemplate { id } => {
                write!(f, "[MISSING IN SVG] id '{}' not found", id)
            }
            Finding::MissingKey { id, key } => {
                write!(f, "[MISSING KEY] field {}: '{}' absent", id, key)
            }
            Finding::OutOfPage { id, x, y } => write!(
                f,
                "[OUT OF PAGE] {}: x/y=({},{}) out of 0..{}/{}",
                id, x, y, PAGE_WIDTH, PAGE_HEIGHT
            ),
            Finding::NonPositiveSize { id, w, h } => {
                write!(f, "[SIZE<=0] {}: w/h=({},{})", id, w, h)
            }
            Finding::BadFont { id, font } => write!(
                f,
                "[FONT KEY] {}: font='{}' should be 'regular' or 'bold'",
                id,
                font.as_deref().unwrap_or("")
            ),
            Finding::ExtraInTemplate { id } => {
                write!(f, "[EXTRA IN SVG] '{}' exists in SVG but not in manifest", id)
            }
        }
    }
}

/// Cross-validate a template's element ids against a manifest.
///
/// Returns every discrepancy found; an empty list means the pair is
/// consistent. Deterministic and side-effect free.
pub fn validate_manifest(template: &TemplateIds, manifest: &Manifest) -> Vec<Finding> {
    let mut findings = Vec::new();

    // 1) fonts block must declare both faces
    let fonts_ok = manifest
        .fonts
        .as_ref()
        .map(|fonts| fonts.regular.is_some() && fonts.bold.is_some())
        .unwrap_or(false);
    if !fonts_ok {
        findings.push(Finding::FontsIncomplete);
    }

    // 2) per-field checks, each independent of the others
    let mut manifest_ids = BTreeSet::new();
    for field in &manifest.fields {
        let id = field.id.clone();
        manifest_ids.insert(id.clone());

        if !template.contains(&id) {
            findings.push(Finding::MissingInTemplate { id: id.clone() });
        }

        for (key, value) in [
            ("x", field.x),
            ("y", field.y),
            ("w", field.w),
            ("h", field.h),
            ("size", field.size),
        ] {
            if value.is_none() {
                findings.push(Finding::MissingKey { id: id.clone(), key });
            }
        }

        // Absent coordinates count as 0, matching the rendering default
        let x = field.x.unwrap_or(0.0);
        let y = field.y.unwrap_or(0.0);
        if !(0.0..=PAGE_WIDTH).contains(&x) || !(0.0..=PAGE_HEIGHT).contains(&y) {
            findings.push(Finding::OutOfPage { id: id.clone(), x, y });
        }

        let w = field.w.unwrap_or(0.0);
        let h = field.h.unwrap_or(0.0);
        if w <= 0.0 || h <= 0.0 {
            findings.push(Finding::NonPositiveSize { id: id.clone(), w, h });
        }

        match field.font.as_deref() {
            Some("regular") | Some("bold") => {}
            other => findings.push(Finding::BadFont {
                id: id.clone(),
                font: other.map(|s| s.to_string()),
            }),
        }
    }

    // 3) var_ elements in the template with no manifest entry
    for id in template.iter() {
        if id.starts_with(VAR_PREFIX) && !manifest_ids.contains(id) {
            findings.push(Finding::ExtraInTemplate { id: id.to_string() });
        }
    }

    findings
}
