//! CSV file reading into Polars.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Every column is read as text. Typed parsing happens per cell, so a stray
/// value deep in a file only drops that cell from the computations needing it.
const INFER_SCHEMA_ROWS: usize = 0;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Rejects UTF-16 files; UTF-8 with or without BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Strips a UTF-8 byte-order mark left on the first header.
fn strip_bom_from_header(df: &mut DataFrame) -> PolarsResult<()> {
    let Some(first) = df.get_column_names().first().map(|name| name.to_string()) else {
        return Ok(());
    };
    if let Some(clean) = first.strip_prefix('\u{feff}') {
        let clean = PlSmallStr::from(clean);
        df.rename(&first, clean)?;
    }
    Ok(())
}

/// Reads a single-header CSV file into a `DataFrame`.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    strip_bom_from_header(&mut df).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read CSV table"
    );
    Ok(df)
}
