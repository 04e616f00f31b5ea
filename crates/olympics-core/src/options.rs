//! Sidebar filter options derived from the loaded catalog.

use olympics_ingest::Catalog;
use olympics_model::FilterOptions;

use crate::aggregate::distinct_values;
use crate::schema::CanonicalField;

/// Values offered for each filter.
///
/// Countries and continents come from the (enriched) medal totals. Sports
/// come from the events table, or from athletes when events carry none.
pub fn filter_options(catalog: &Catalog) -> FilterOptions {
    let medals_total = catalog.medals_total();
    let mut sports = distinct_values(catalog.events(), CanonicalField::Sport);
    if sports.is_empty() {
        sports = distinct_values(catalog.athletes(), CanonicalField::Sport);
    }
    FilterOptions {
        countries: distinct_values(medals_total, CanonicalField::Country),
        sports,
        continents: distinct_values(medals_total, CanonicalField::Continent),
    }
}
