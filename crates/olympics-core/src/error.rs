//! Error types for the dashboard core.
//!
//! Missing columns, unparseable cells and empty tables are not errors; they
//! degrade to empty or zero results. What remains is I/O at load time and
//! Polars failures on malformed frames.

use polars::prelude::PolarsError;
use thiserror::Error;

use olympics_ingest::IngestError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("dataframe operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
