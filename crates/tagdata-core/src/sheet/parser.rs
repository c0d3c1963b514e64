//! Rule-driven spec-sheet parser.
//!
//! Extraction is best-effort by contract: every field degrades to an empty
//! string when its pattern finds nothing, and a record is always produced.

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::record::{col, FieldSet};
use crate::pricing::{PriceTable, CURRENCIES};

use super::rules::{self, batch_code, extract_barcode, validate_ean13, FIELD_RULES};

/// Result of parsing one spec sheet.
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    /// Extracted field values, keyed by output column.
    pub fields: FieldSet,
    /// Handover / tech pack / last revision date, when the sheet carries one.
    /// Kept separate from the schema; `today_date` is always the run date.
    pub handover_date: Option<String>,
    /// Fields the patterns could not find.
    pub warnings: Vec<String>,
}

/// Spec-sheet parser applying the declarative field rules.
pub struct SheetParser {
    /// Whether to validate extracted barcodes against the EAN-13 checksum.
    validate_barcode: bool,
}

impl SheetParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            validate_barcode: true,
        }
    }

    /// Set EAN-13 checksum validation.
    pub fn with_barcode_validation(mut self, validate: bool) -> Self {
        self.validate_barcode = validate;
        self
    }

    /// Parse the document text, dating derived fields to today.
    pub fn parse(&self, text: &str, prices: &PriceTable) -> ParsedSheet {
        self.parse_as_of(text, prices, Local::now().date_naive())
    }

    /// Parse the document text with an explicit run date.
    pub fn parse_as_of(&self, text: &str, prices: &PriceTable, today: NaiveDate) -> ParsedSheet {
        let mut fields = FieldSet::new();
        let mut warnings = Vec::new();

        info!("parsing spec sheet from {} characters of text", text.len());

        for rule in FIELD_RULES.iter() {
            match rule.capture(text) {
                Some(value) if !value.is_empty() => {
                    fields.insert(rule.column.to_string(), value);
                }
                _ => {
                    warnings.push(format!("could not extract {}", rule.column));
                    fields.insert(rule.column.to_string(), String::new());
                }
            }
        }

        // Barcode: first standalone 13-digit run, kept only if the checksum
        // holds. An invalid candidate leaves the column empty, it is never
        // carried through.
        let barcode = match extract_barcode(text) {
            Some(candidate) if !self.validate_barcode || validate_ean13(&candidate) => candidate,
            Some(candidate) => {
                warnings.push(format!("barcode {} failed EAN-13 checksum", candidate));
                String::new()
            }
            None => {
                warnings.push("could not extract barcode".to_string());
                String::new()
            }
        };
        fields.insert(col::BARCODE.to_string(), barcode);

        // Derived fields: run date and batch code are computed, never parsed.
        fields.insert(col::TODAY_DATE.to_string(), today.format("%Y-%m-%d").to_string());
        fields.insert(col::BATCH.to_string(), batch_code(today));

        // Base PLN price; a missing or malformed amount defaults to zero.
        let base_pln = rules::patterns::BASE_PRICE
            .captures(text)
            .and_then(|caps| Decimal::from_str(&caps[1].replace(',', ".")).ok())
            .unwrap_or_else(|| {
                warnings.push("could not extract base PLN price, defaulting to 0".to_string());
                Decimal::ZERO
            });

        let amounts = prices.resolve(base_pln);
        for currency in CURRENCIES {
            let value = amounts.get(currency).cloned().unwrap_or_default();
            fields.insert(currency.to_string(), value);
        }

        // Product name is filled downstream from the translations table.
        fields.insert(col::PRODUCT_NAME.to_string(), String::new());

        let handover_date = rules::patterns::HANDOVER_DATE
            .captures(text)
            .map(|caps| caps[1].trim().to_string());

        debug!(
            "extracted {} fields with {} warnings",
            fields.len(),
            warnings.len()
        );

        ParsedSheet {
            fields,
            handover_date,
            warnings,
        }
    }
}

impl Default for SheetParser {
    fn default() -> Self {
        Self::new()
    }
}
