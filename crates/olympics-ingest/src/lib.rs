//! Olympics dataset ingestion.
//!
//! Discovers the fixed set of CSV files in a data directory and loads them
//! into Polars `DataFrame`s. Missing files degrade to empty tables; only a
//! missing directory, unreadable file or non-tabular content is an error.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use olympics_ingest::load_catalog;
//!
//! let catalog = load_catalog(Path::new("data"))?;
//! println!("{} athletes", catalog.athletes().height());
//! ```

mod catalog;
mod csv;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_table, validate_encoding};

// === File Discovery ===
pub use discovery::{discover_datasets, list_csv_files};

// === Catalog ===
pub use catalog::{Catalog, load_catalog};
