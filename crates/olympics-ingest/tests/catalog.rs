//! Integration tests for catalog loading.

use std::fs;
use std::path::Path;

use olympics_ingest::{Catalog, IngestError, load_catalog};
use olympics_model::DatasetKind;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn loads_present_files_and_defaults_missing_ones() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "medals_total.csv",
        "country_code,country,country_long,Gold Medal,Silver Medal,Bronze Medal,Total\n\
         USA,United States,United States of America,40,44,42,126\n\
         FRA,France,France,16,26,22,64\n",
    );
    write(
        dir.path(),
        "events.csv",
        "event,tag,sport,sport_code\n\
         Men's 100m,athletics,Athletics,ATH\n\
         Women's Singles,tennis,Tennis,TEN\n",
    );

    let catalog = load_catalog(dir.path()).unwrap();

    assert_eq!(catalog.medals_total().height(), 2);
    assert_eq!(catalog.events().height(), 2);
    assert_eq!(catalog.athletes().height(), 0);
    assert_eq!(
        catalog.populated(),
        vec![DatasetKind::Events, DatasetKind::MedalsTotal]
    );
}

#[test]
fn missing_directory_is_an_error() {
    let result = load_catalog(Path::new("/no/such/olympics/data"));
    assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
}

#[test]
fn empty_directory_loads_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(dir.path()).unwrap();
    assert!(catalog.populated().is_empty());
}

#[test]
fn default_catalog_has_every_kind() {
    let catalog = Catalog::default();
    for kind in DatasetKind::ALL {
        assert_eq!(catalog.get(kind).height(), 0);
    }
}
