//! Tag-template / manifest consistency validation.
//!
//! The SVG template and the JSON manifest are edited independently; this
//! module cross-references the two and reports every mismatch, without
//! touching the extraction pipeline.

mod manifest;
mod svg;
mod validator;

pub use manifest::{FieldPlacement, Fonts, Manifest};
pub use svg::TemplateIds;
pub use validator::{validate_manifest, Finding, PAGE_HEIGHT, PAGE_WIDTH, VAR_PREFIX};
