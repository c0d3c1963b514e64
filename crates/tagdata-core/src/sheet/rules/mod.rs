//! Rule-based field extractors for product spec sheets.
//!
//! Labeled fields are described declaratively: one `(column, pattern)` rule
//! per field, evaluated uniformly by the parser. Adding a field is a data
//! change here, not new control flow.

pub mod batch;
pub mod ean;
pub mod patterns;

pub use batch::batch_code;
pub use ean::{extract_barcode, validate_ean13};

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::col;

/// One declarative extraction rule: a target column and its pattern.
///
/// The first match wins; capture group 1, trimmed, is the field value. No
/// match yields an empty string, never an error.
pub struct FieldRule {
    /// Output column this rule populates.
    pub column: &'static str,
    /// Pattern searched against the full document text.
    pub pattern: &'static Regex,
}

impl FieldRule {
    /// Apply the rule to the document text.
    pub fn capture(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

lazy_static! {
    /// The labeled-field rules, evaluated independently of each other.
    pub static ref FIELD_RULES: Vec<FieldRule> = vec![
        FieldRule { column: col::ORDER_ID, pattern: &patterns::ORDER_ID },
        FieldRule { column: col::STYLE_CODE, pattern: &patterns::STYLE_CODE },
        FieldRule { column: col::COLOUR, pattern: &patterns::COLOUR },
        FieldRule { column: col::SUPPLIER_NAME, pattern: &patterns::SUPPLIER_NAME },
        FieldRule { column: col::COLLECTION, pattern: &patterns::COLLECTION },
        FieldRule { column: col::COLOUR_SKU, pattern: &patterns::COLOUR_SKU },
        FieldRule { column: col::ITEM_CLASSIFICATION, pattern: &patterns::ITEM_CLASSIFICATION },
        FieldRule { column: col::STYLE, pattern: &patterns::STYLE_NAME },
        FieldRule { column: col::SUPPLIER_PRODUCT_CODE, pattern: &patterns::SUPPLIER_PRODUCT_CODE },
    ];
}
