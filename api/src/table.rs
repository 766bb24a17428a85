//! Normalization of `ResultSet` tables into header-keyed rows.

use crate::NormalizedRow;
use crate::stats::{Cell, ResultSet};
use log::warn;
use std::collections::HashMap;

/// Normalize every row of the selected tables.
///
/// With `select`, only tables with that exact name are decoded; an unmatched
/// name yields no rows. Tables keep input order and rows keep source order.
/// Rows whose width differs from the header count are dropped.
pub fn decode(result_sets: &[ResultSet], select: Option<&str>) -> Vec<NormalizedRow> {
    result_sets
        .iter()
        .filter(|set| select.is_none_or(|name| set.name == name))
        .flat_map(decode_set)
        .collect()
}

/// Normalize one table.
pub fn decode_set(set: &ResultSet) -> Vec<NormalizedRow> {
    set.rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            if row.len() != set.headers.len() {
                warn!(
                    "skipping row {index} of {}: {} cells for {} headers",
                    set.name,
                    row.len(),
                    set.headers.len()
                );
                return None;
            }
            Some(zip_row(&set.headers, row))
        })
        .collect()
}

/// Normalize every table, keyed by table name. A repeated name keeps the
/// later table.
pub fn decode_all(result_sets: &[ResultSet]) -> HashMap<String, Vec<NormalizedRow>> {
    result_sets
        .iter()
        .map(|set| (set.name.clone(), decode_set(set)))
        .collect()
}

/// String cells of a single column, in row order. Non-string cells and rows
/// too short to hold the column are passed over.
pub fn string_column(set: &ResultSet, header: &str) -> Vec<String> {
    let Some(index) = set.headers.iter().position(|h| h == header) else {
        return Vec::new();
    };
    set.rows
        .iter()
        .filter_map(|row| row.get(index).and_then(Cell::as_str))
        .map(str::to_owned)
        .collect()
}

/// Look up a value, treating an empty string (a null cell) as absent.
pub fn field<'a>(row: &'a NormalizedRow, key: &str) -> Option<&'a str> {
    row.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Integer value of a field. Whole floats such as `"110.0"` are accepted.
pub fn int_field(row: &NormalizedRow, key: &str) -> Option<i64> {
    let raw = field(row, key)?.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

// Later duplicates overwrite earlier ones.
fn zip_row(headers: &[String], row: &[Cell]) -> NormalizedRow {
    headers
        .iter()
        .zip(row)
        .map(|(header, cell)| (header.clone(), cell.to_display_string()))
        .collect()
}
