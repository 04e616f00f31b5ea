//! The loaded set of dataset tables.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{info, warn};

use olympics_model::DatasetKind;

use crate::csv::read_csv_table;
use crate::discovery::{discover_datasets, list_csv_files};
use crate::error::Result;

/// Every dataset table, keyed by kind. Absent tables are empty frames.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: BTreeMap<DatasetKind, DataFrame>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_tables(std::iter::empty())
    }
}

impl Catalog {
    /// Builds a catalog from in-memory tables; kinds not supplied are empty.
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (DatasetKind, DataFrame)>,
    {
        let mut map: BTreeMap<DatasetKind, DataFrame> = DatasetKind::ALL
            .into_iter()
            .map(|kind| (kind, DataFrame::default()))
            .collect();
        map.extend(tables);
        Self { tables: map }
    }

    pub fn get(&self, kind: DatasetKind) -> &DataFrame {
        // Every kind is inserted by `from_tables`.
        &self.tables[&kind]
    }

    /// Replaces one table, returning the previous one.
    pub fn replace(&mut self, kind: DatasetKind, table: DataFrame) -> DataFrame {
        self.tables.insert(kind, table).unwrap_or_default()
    }

    pub fn athletes(&self) -> &DataFrame {
        self.get(DatasetKind::Athletes)
    }

    pub fn events(&self) -> &DataFrame {
        self.get(DatasetKind::Events)
    }

    pub fn medals(&self) -> &DataFrame {
        self.get(DatasetKind::Medals)
    }

    pub fn medals_total(&self) -> &DataFrame {
        self.get(DatasetKind::MedalsTotal)
    }

    pub fn nocs(&self) -> &DataFrame {
        self.get(DatasetKind::Nocs)
    }

    pub fn schedules(&self) -> &DataFrame {
        self.get(DatasetKind::Schedules)
    }

    pub fn venues(&self) -> &DataFrame {
        self.get(DatasetKind::Venues)
    }

    /// Kinds whose table has at least one row.
    pub fn populated(&self) -> Vec<DatasetKind> {
        self.tables
            .iter()
            .filter(|(_, df)| df.height() > 0)
            .map(|(kind, _)| *kind)
            .collect()
    }
}

/// Loads every known dataset from `dir`.
///
/// Files that are absent are logged and replaced by empty tables.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let files = list_csv_files(dir)?;
    let found = discover_datasets(&files);

    let mut tables = Vec::with_capacity(found.len());
    for kind in DatasetKind::ALL {
        match found.get(&kind) {
            Some(path) => tables.push((kind, read_csv_table(path)?)),
            None => warn!(
                dataset = %kind,
                dir = %dir.display(),
                "dataset file missing; using empty table"
            ),
        }
    }

    let catalog = Catalog::from_tables(tables);
    info!(
        dir = %dir.display(),
        loaded = catalog.populated().len(),
        "loaded dataset catalog"
    );
    Ok(catalog)
}
