//! Row masks over dataset tables.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use olympics_common::column_text;
use olympics_model::Selection;

use crate::error::Result;

/// A conjunctive keep-mask, one entry per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMask {
    keep: Vec<bool>,
}

impl RowMask {
    /// A mask that keeps every row of `df`.
    pub fn keep_all(df: &DataFrame) -> Self {
        Self {
            keep: vec![true; df.height()],
        }
    }

    /// Drops rows whose value in `column` the selection does not permit.
    ///
    /// A missing column or an unrestricted selection leaves the mask as is.
    pub fn restrict(&mut self, df: &DataFrame, column: Option<&str>, selection: &Selection) {
        let Some(column) = column else {
            return;
        };
        if selection.is_unrestricted() {
            return;
        }
        self.restrict_with(df, column, |value| selection.permits(value));
    }

    /// Drops rows for which `predicate` is false on the value in `column`.
    pub fn restrict_with<F>(&mut self, df: &DataFrame, column: &str, predicate: F)
    where
        F: Fn(Option<&str>) -> bool,
    {
        let values = column_text(df, column);
        for (keep, value) in self.keep.iter_mut().zip(&values) {
            *keep = *keep && predicate(value.as_deref());
        }
    }

    /// Number of rows the mask keeps.
    pub fn kept(&self) -> usize {
        self.keep.iter().filter(|keep| **keep).count()
    }

    pub fn len(&self) -> usize {
        self.keep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keep.is_empty()
    }

    /// Applies the mask, returning a new table.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        filter_rows(df, &self.keep)
    }
}

/// Keeps the rows of `df` whose entry in `keep` is true.
pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    if keep.iter().all(|keep| *keep) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}
