//! Core library for price-tag data preparation.
//!
//! This crate provides:
//! - PDF spec-sheet processing (per-page text extraction)
//! - Rule-based field extraction (order id, style code, colour, barcode, prices)
//! - EAN-13 barcode checksum validation
//! - Nearest-row price resolution against a reference table
//! - Fixed-schema record assembly and semicolon-delimited CSV output
//! - Tag-template / manifest consistency validation

pub mod error;
pub mod models;
pub mod output;
pub mod pdf;
pub mod pricing;
pub mod sheet;
pub mod template;

pub use error::{Result, TagdataError};
pub use models::record::{FieldSet, COLUMNS};
pub use output::Table;
pub use pdf::read_document_text;
pub use pricing::PriceTable;
pub use sheet::{ParsedSheet, SheetParser};
pub use template::{validate_manifest, Finding, Manifest, TemplateIds};
