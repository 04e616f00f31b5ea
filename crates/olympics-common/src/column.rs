//! Typed column extraction.
//!
//! A column that does not exist yields one `None` per row, so callers can
//! treat absent fields as empty without branching.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use crate::cell::{cell_number, cell_text};

/// Extract a column as trimmed optional strings.
pub fn column_text(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    let Ok(column) = df.column(name) else {
        return vec![None; df.height()];
    };
    (0..df.height())
        .map(|idx| cell_text(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Extract a column as optional numbers.
pub fn column_numbers(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    let Ok(column) = df.column(name) else {
        return vec![None; df.height()];
    };
    (0..df.height())
        .map(|idx| cell_number(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Sorted unique non-null values of a text column.
pub fn distinct_sorted(df: &DataFrame, name: &str) -> Vec<String> {
    column_text(df, name)
        .into_iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
