//! The canonical product-record schema.
//!
//! Every output row carries exactly these 21 columns, in this order. Column
//! names match the downstream tag-rendering tooling and must not be reordered.

use std::collections::HashMap;

/// Column names used by the extraction rules and the assembler.
pub mod col {
    pub const ORDER_ID: &str = "Order_ID";
    pub const STYLE_CODE: &str = "STYLE_CODE";
    pub const COLOUR: &str = "COLOUR";
    pub const SUPPLIER_PRODUCT_CODE: &str = "Supplier_product_code";
    pub const ITEM_CLASSIFICATION: &str = "Item_classification";
    pub const SUPPLIER_NAME: &str = "Supplier_name";
    pub const TODAY_DATE: &str = "today_date";
    pub const COLLECTION: &str = "COLLECTION";
    pub const COLOUR_SKU: &str = "COLOUR_SKU";
    pub const STYLE: &str = "STYLE";
    pub const BATCH: &str = "Batch";
    pub const BARCODE: &str = "barcode";
    pub const PRODUCT_NAME: &str = "product_name";
}

/// The fixed output schema, in output order.
pub const COLUMNS: [&str; 21] = [
    col::ORDER_ID,
    col::STYLE_CODE,
    col::COLOUR,
    col::SUPPLIER_PRODUCT_CODE,
    col::ITEM_CLASSIFICATION,
    col::SUPPLIER_NAME,
    col::TODAY_DATE,
    col::COLLECTION,
    col::COLOUR_SKU,
    col::STYLE,
    col::BATCH,
    col::BARCODE,
    "EUR",
    "BGN",
    "BAM",
    "PLN",
    "RON",
    "CZK",
    "RSD",
    "HUF",
    col::PRODUCT_NAME,
];

/// One extracted document's field values, keyed by column name.
///
/// A field set may be sparse; assembly fills absent columns with an empty
/// string.
pub type FieldSet = HashMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_21_columns() {
        assert_eq!(COLUMNS.len(), 21);
    }

    #[test]
    fn test_schema_column_order() {
        assert_eq!(COLUMNS[0], "Order_ID");
        assert_eq!(COLUMNS[10], "Batch");
        assert_eq!(COLUMNS[11], "barcode");
        assert_eq!(COLUMNS[12], "EUR");
        assert_eq!(COLUMNS[19], "HUF");
        assert_eq!(COLUMNS[20], "product_name");
    }
}
