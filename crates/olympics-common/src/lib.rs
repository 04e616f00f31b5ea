//! Shared utilities for the Olympics dashboard crates.
//!
//! Dataset tables arrive with heterogeneous cell types (strings, integers,
//! floats, nulls). This crate converts Polars `AnyValue` cells into typed
//! optional values so downstream code never re-checks for null/string/number.

pub mod cell;
pub mod column;

pub use cell::{cell_number, cell_text};
pub use column::{column_numbers, column_text, distinct_sorted};
