//! Data model for the Olympics dashboard.
//!
//! Pure types shared by the ingestion, core and CLI crates. Nothing here
//! touches Polars; tables live in `olympics-core` and `olympics-ingest`.

pub mod dataset;
pub mod error;
pub mod filter;
pub mod lookup;
pub mod medal;
pub mod report;

pub use dataset::DatasetKind;
pub use error::{ModelError, Result};
pub use filter::{FilterOptions, FilterState, MedalFlags, Selection};
pub use lookup::CaseInsensitiveSet;
pub use medal::MedalKind;
pub use report::{
    AgeBucket, AgeBucketCount, AgeDistribution, AthleteReport, CategoryCount, DisciplineMedals,
    EventEntry, GenderCount, GlobalReport, GroupTotal, HierarchyLeaf, MedalShare, MedalTotals,
    OverviewKpis, OverviewReport, ScheduleEntry, SportsReport, VenueEntry,
};
