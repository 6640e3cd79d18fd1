//! Grouping raw order lines into transactions.
//!
//! Line items reference products by code; the catalogue maps codes to display
//! names. Codes are matched after trimming and upper-casing, names are trimmed
//! and lower-cased, so the engine only ever sees normalized labels.

use super::types::Transaction;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[cfg(feature = "cli")]
use crate::error::DataError;
#[cfg(feature = "cli")]
use std::path::Path;

/// One line of a sales record: an item code sold under an order number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineItem {
    pub order: String,
    pub code: String,
}

/// Catalogue entry mapping an item code to its name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogueEntry {
    pub code: String,
    pub name: String,
}

/// Trims and upper-cases an item code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Trims and lower-cases an item name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Joins `lines` against `catalogue` and groups them into one transaction per
/// order, ordered by order number.
///
/// Lines whose code is missing from the catalogue are dropped. Repeated items
/// within an order collapse into one.
pub fn build_transactions(
    lines: &[LineItem],
    catalogue: &[CatalogueEntry],
) -> Vec<Transaction<String>> {
    let names: HashMap<String, String> = catalogue
        .iter()
        .map(|e| (normalize_code(&e.code), normalize_name(&e.name)))
        .collect();

    let mut orders: BTreeMap<&str, Transaction<String>> = BTreeMap::new();
    let mut unmatched = 0usize;
    for line in lines {
        match names.get(&normalize_code(&line.code)) {
            Some(name) => {
                orders
                    .entry(line.order.as_str())
                    .or_default()
                    .insert(name.clone());
            }
            None => unmatched += 1,
        }
    }

    debug!(
        lines = lines.len(),
        unmatched,
        transactions = orders.len(),
        "grouped line items"
    );
    orders.into_values().collect()
}

/// Reads a JSON array of [`LineItem`]s.
#[cfg(feature = "cli")]
pub fn load_line_items(path: &Path) -> Result<Vec<LineItem>, DataError> {
    load_json(path)
}

/// Reads a JSON array of [`CatalogueEntry`]s.
#[cfg(feature = "cli")]
pub fn load_catalogue(path: &Path) -> Result<Vec<CatalogueEntry>, DataError> {
    load_json(path)
}

#[cfg(feature = "cli")]
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Decode {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(order: &str, code: &str) -> LineItem {
        LineItem {
            order: order.into(),
            code: code.into(),
        }
    }

    fn entry(code: &str, name: &str) -> CatalogueEntry {
        CatalogueEntry {
            code: code.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_code("  ab12 "), "AB12");
        assert_eq!(normalize_name(" Iced Tea\t"), "iced tea");
    }

    #[test]
    fn test_join_and_group() {
        let catalogue = vec![entry("C1", " Coffee "), entry("t2", "TEA"), entry("K3", "Cake")];
        let lines = vec![
            line("002", "c1"),
            line("001", "C1 "),
            line("001", "K3"),
            line("001", "K3"),
            line("002", "T2"),
            line("003", "ZZ"),
        ];

        let transactions = build_transactions(&lines, &catalogue);
        assert_eq!(transactions.len(), 2);

        let first: Vec<&str> = transactions[0].iter().map(String::as_str).collect();
        let second: Vec<&str> = transactions[1].iter().map(String::as_str).collect();
        assert_eq!(first, vec!["cake", "coffee"]);
        assert_eq!(second, vec!["coffee", "tea"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_transactions(&[], &[]).is_empty());
        assert!(build_transactions(&[line("1", "X")], &[]).is_empty());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_line_items_from_json() {
        let path = std::env::temp_dir().join(format!("novelrule-lines-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"order":"1","code":"a1"},{"order":"1","code":"b2"}]"#).unwrap();
        let lines = load_line_items(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(lines, vec![line("1", "a1"), line("1", "b2")]);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_missing_file() {
        let err = load_catalogue(Path::new("/nonexistent/catalogue.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
