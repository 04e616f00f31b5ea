//! A single user session: the loaded catalog and its filter state.

use std::path::Path;

use tracing::info;

use olympics_ingest::{Catalog, load_catalog};
use olympics_model::{
    AthleteReport, DatasetKind, FilterOptions, FilterState, GlobalReport, OverviewReport,
    SportsReport,
};

use crate::continent::enrich_with_continent;
use crate::error::Result;
use crate::options::filter_options;
use crate::pages::{self, PageLimits};

/// Owns the catalog and exactly one [`FilterState`].
///
/// The catalog is loaded and enriched once; the filter state is replaced
/// wholesale by [`Session::set_filters`] and read through snapshots.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    options: FilterOptions,
    filters: FilterState,
}

impl Session {
    /// Loads every dataset from `dir` and prepares the session.
    pub fn load(dir: &Path) -> Result<Self> {
        let catalog = load_catalog(dir)?;
        Self::from_catalog(catalog)
    }

    /// Enriches medal totals with continents and derives the filter options.
    ///
    /// The initial filter state pre-selects every continent on offer.
    pub fn from_catalog(mut catalog: Catalog) -> Result<Self> {
        let enriched = enrich_with_continent(catalog.medals_total())?;
        catalog.replace(DatasetKind::MedalsTotal, enriched);

        let options = filter_options(&catalog);
        let filters = FilterState::initial(&options);
        info!(
            countries = options.countries.len(),
            sports = options.sports.len(),
            continents = options.continents.len(),
            "session ready"
        );
        Ok(Self {
            catalog,
            options,
            filters,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// An immutable copy of the current selection for one render pass.
    pub fn snapshot(&self) -> FilterState {
        self.filters.clone()
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    pub fn overview(&self, limits: PageLimits) -> Result<OverviewReport> {
        pages::overview(&self.catalog, &self.snapshot(), limits)
    }

    pub fn global(&self, limits: PageLimits) -> Result<GlobalReport> {
        pages::global(&self.catalog, &self.snapshot(), limits)
    }

    pub fn athletes(&self, limits: PageLimits) -> Result<AthleteReport> {
        pages::athletes(&self.catalog, &self.snapshot(), limits)
    }

    pub fn sports(&self, limits: PageLimits, schedule_sport: Option<&str>) -> Result<SportsReport> {
        pages::sports(&self.catalog, &self.snapshot(), limits, schedule_sport)
    }
}
