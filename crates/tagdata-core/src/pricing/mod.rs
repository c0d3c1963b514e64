//! Currency price resolution against a reference table.
//!
//! Prices are looked up, not computed: a base PLN amount selects the table
//! row with the numerically closest PLN value, and that row supplies the
//! amounts for every other currency. The table is loaded once per run and
//! treated as read-only.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// The eight currency columns of the output schema, in output order.
pub const CURRENCIES: [&str; 8] = ["EUR", "BGN", "BAM", "PLN", "RON", "CZK", "RSD", "HUF"];

/// Header of the reference table CSV (PLN first, the lookup key).
const TABLE_HEADER: [&str; 8] = ["PLN", "EUR", "BGN", "BAM", "RON", "CZK", "RSD", "HUF"];

/// Built-in fallback tiers used when no usable table can be loaded.
const DEFAULT_TIERS: [[i64; 8]; 4] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [10, 3, 6, 6, 15, 70, 350, 1200],
    [20, 5, 11, 11, 30, 140, 700, 2400],
    [30, 7, 17, 17, 45, 210, 1050, 3600],
];

/// One reference row: a PLN lookup key plus the raw cell values by currency.
///
/// Cells stay as raw strings; unparseable cells are carried through to the
/// output unmodified instead of failing the row.
#[derive(Debug, Clone)]
struct PriceRow {
    pln: Decimal,
    cells: Vec<(String, String)>,
}

/// An immutable reference price table.
#[derive(Debug, Clone)]
pub struct PriceTable {
    rows: Vec<PriceRow>,
}

impl PriceTable {
    /// The built-in four-tier fallback table.
    pub fn default_table() -> Self {
        let rows = DEFAULT_TIERS
            .iter()
            .map(|tier| PriceRow {
                pln: Decimal::from(tier[0]),
                cells: TABLE_HEADER
                    .iter()
                    .zip(tier.iter())
                    .map(|(name, v)| (name.to_string(), v.to_string()))
                    .collect(),
            })
            .collect();
        Self { rows }
    }

    /// Load a table from a CSV file with header `PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF`.
    ///
    /// A missing, empty, or malformed file is not fatal: the built-in default
    /// table is used instead so that price resolution never fails outright.
    pub fn from_path(path: &Path) -> Self {
        match std::fs::File::open(path) {
            Ok(file) => match Self::from_reader(file) {
                Ok(table) if !table.rows.is_empty() => {
                    debug!("loaded {} price rows from {}", table.rows.len(), path.display());
                    table
                }
                Ok(_) => {
                    warn!("price table {} has no usable rows, using built-in default", path.display());
                    Self::default_table()
                }
                Err(e) => {
                    warn!("failed to read price table {}: {}, using built-in default", path.display(), e);
                    Self::default_table()
                }
            },
            Err(e) => {
                warn!("price table {} not available: {}, using built-in default", path.display(), e);
                Self::default_table()
            }
        }
    }

    /// Parse a table from any reader. Rows whose PLN cell does not parse as
    /// a number are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let cells: Vec<(String, String)> = headers
                .iter()
                .zip(record.iter())
                .map(|(name, value)| (name.clone(), value.trim().to_string()))
                .collect();

            let pln = cells
                .iter()
                .find(|(name, _)| name == "PLN")
                .and_then(|(_, value)| Decimal::from_str(value).ok());

            match pln {
                Some(pln) => rows.push(PriceRow { pln, cells }),
                None => warn!("skipping price row without a numeric PLN value"),
            }
        }

        Ok(Self { rows })
    }

    /// Number of reference rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a base PLN amount to a full set of currency amounts.
    ///
    /// Selects the row whose PLN value is closest to the query; ties break
    /// toward the lower PLN value. Parseable cells are truncated (not
    /// rounded) to integers; unparseable cells pass through unmodified. A
    /// row without a PLN cell gets the query amount injected; currencies
    /// absent from the row default to "0".
    pub fn resolve(&self, base_pln: Decimal) -> HashMap<String, String> {
        if self.rows.is_empty() {
            return Self::default_table().resolve(base_pln);
        }

        let row = self
            .rows
            .iter()
            .min_by(|a, b| {
                let da = (a.pln - base_pln).abs();
                let db = (b.pln - base_pln).abs();
                da.cmp(&db).then(a.pln.cmp(&b.pln))
            })
            .expect("rows is non-empty");

        let mut amounts = HashMap::new();
        for (name, raw) in &row.cells {
            let value = match Decimal::from_str(raw) {
                Ok(d) => truncate_to_int(d),
                Err(_) => raw.clone(),
            };
            amounts.insert(name.clone(), value);
        }

        amounts
            .entry("PLN".to_string())
            .or_insert_with(|| truncate_to_int(base_pln));

        for currency in CURRENCIES {
            amounts
                .entry(currency.to_string())
                .or_insert_with(|| "0".to_string());
        }

        amounts
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::default_table()
    }
}

/// Truncate a decimal amount to its integer part, as a string.
fn truncate_to_int(d: Decimal) -> String {
    d.trunc().to_i64().unwrap_or(0).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(csv: &str) -> PriceTable {
        PriceTable::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_exact_match_returns_row_unchanged() {
        let t = table("PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF\n10,3,6,6,15,70,350,1200\n20,5,11,11,30,140,700,2400\n");
        let amounts = t.resolve(Decimal::from(20));

        assert_eq!(amounts["PLN"], "20");
        assert_eq!(amounts["EUR"], "5");
        assert_eq!(amounts["HUF"], "2400");
    }

    #[test]
    fn test_nearest_row_wins() {
        let t = table("PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF\n10,3,6,6,15,70,350,1200\n20,5,11,11,30,140,700,2400\n");
        // 18 is closer to 20 than to 10
        let amounts = t.resolve(Decimal::from(18));
        assert_eq!(amounts["EUR"], "5");
    }

    #[test]
    fn test_tie_breaks_toward_lower_pln() {
        let t = table("PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF\n20,5,11,11,30,140,700,2400\n10,3,6,6,15,70,350,1200\n");
        // 15 is equidistant from 10 and 20
        let amounts = t.resolve(Decimal::from(15));
        assert_eq!(amounts["EUR"], "3");
    }

    #[test]
    fn test_decimal_cells_truncate_not_round() {
        let t = table("PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF\n10,3.99,6.5,6.1,15.9,70,350,1200\n");
        let amounts = t.resolve(Decimal::from(10));
        assert_eq!(amounts["EUR"], "3");
        assert_eq!(amounts["BGN"], "6");
        assert_eq!(amounts["RON"], "15");
    }

    #[test]
    fn test_unparseable_cell_passes_through() {
        let t = table("PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF\n10,n/a,6,6,15,70,350,1200\n");
        let amounts = t.resolve(Decimal::from(10));
        assert_eq!(amounts["EUR"], "n/a");
    }

    #[test]
    fn test_empty_table_falls_back_to_default() {
        let t = table("PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF\n");
        assert!(t.is_empty());

        let amounts = t.resolve(Decimal::from(25));
        // Nearest default tier to 25 is PLN 20
        assert_eq!(amounts["PLN"], "20");
        assert_eq!(amounts["EUR"], "5");
        assert_eq!(amounts["RSD"], "700");
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let t = PriceTable::from_path(Path::new("/nonexistent/price_table.csv"));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_rows_without_numeric_pln_are_skipped() {
        let t = table("PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF\nabc,3,6,6,15,70,350,1200\n10,3,6,6,15,70,350,1200\n");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_all_currencies_present() {
        let t = PriceTable::default_table();
        let amounts = t.resolve(Decimal::from(0));
        for currency in CURRENCIES {
            assert!(amounts.contains_key(currency), "missing {}", currency);
        }
    }
}
