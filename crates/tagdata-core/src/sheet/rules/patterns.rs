//! Tolerant regex patterns for spec-sheet field extraction.
//!
//! Each pattern is case-insensitive and accepts either `:` or `-` as the
//! label separator, matching the separator drift seen across supplier PDFs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref ORDER_ID: Regex =
        Regex::new(r"(?i)ORDER[\s\-:]*ID\s*[:\-]\s*([A-Z0-9_/\-]+)").unwrap();

    pub static ref STYLE_CODE: Regex =
        Regex::new(r"(?i)STYLE(?:\s*CODE)?\s*[:\-]\s*([A-Z0-9\-]+)").unwrap();

    pub static ref COLOUR: Regex =
        Regex::new(r"(?i)COLOU?R\s*[:\-]\s*([A-Z0-9 /\-]+)").unwrap();

    pub static ref SUPPLIER_NAME: Regex =
        Regex::new(r"(?i)Supplier(?:\s*name)?\s*[:\-]\s*([A-Z0-9 \-]+)").unwrap();

    pub static ref COLLECTION: Regex =
        Regex::new(r"(?i)COLLECTION\s*[:\-]\s*([A-Z0-9 \-]+)").unwrap();

    pub static ref COLOUR_SKU: Regex =
        Regex::new(r"(?i)(?:SKU|COLOUR\s*SKU)\s*[:\-]\s*([A-Z0-9 \-]+)").unwrap();

    pub static ref ITEM_CLASSIFICATION: Regex =
        Regex::new(r"(?i)ITEM(?:\s*CLASSIFICATION)?\s*[:\-]\s*([A-Z0-9 \-]+)").unwrap();

    pub static ref STYLE_NAME: Regex =
        Regex::new(r"(?i)STYLE\s*[:\-]\s*([A-Z0-9 \-]+)").unwrap();

    pub static ref SUPPLIER_PRODUCT_CODE: Regex =
        Regex::new(r"(?i)Supplier[_\s\-]?product[_\s\-]?code\s*[:\-]\s*([A-Z0-9 \-]+)").unwrap();

    // Handover / tech pack / last revision date, kept as raw text
    pub static ref HANDOVER_DATE: Regex =
        Regex::new(r"(?i)(?:Handover|Tech Pack|Last Revision)\s*(?:Date)?\s*[:\-]\s*([0-9/\-.]+)").unwrap();

    // Standalone 13-digit run, the EAN-13 candidate
    pub static ref BARCODE: Regex = Regex::new(r"\b(\d{13})\b").unwrap();

    // Labeled base price in PLN, with optional thousands/decimal separators
    pub static ref BASE_PRICE: Regex =
        Regex::new(r"(?i)PLN\s*[:\-]?\s*([\d.,]+)").unwrap();
}
