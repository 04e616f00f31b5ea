//! Aggregators.
//!
//! Pure reducers over filtered tables. Every aggregator returns a
//! well-defined empty result for an empty table or a missing column.

mod athletes;
mod events;
mod medals;

pub use athletes::{
    REFERENCE_YEAR, age_distribution, age_from_birth_date, gender_split, normalize_gender,
    parse_birth_year,
};
pub use events::{
    count_by, distinct_count, distinct_values, event_details, medals_by_discipline,
    schedule_entries, venue_entries,
};
pub use medals::{
    GroupBy, hierarchy_leaves, medal_shares, medal_totals_by, medal_type_totals, top_n,
};

use polars::prelude::DataFrame;

use olympics_model::OverviewKpis;

use crate::filters::MedalView;
use crate::schema::CanonicalField;

/// Headline numbers for the overview page.
///
/// Countries are NOC rows, sports are distinct event sports and medals are
/// the included medal columns summed over `medals`.
pub fn overview_kpis(
    athletes: &DataFrame,
    nocs: &DataFrame,
    events: &DataFrame,
    medals: &MedalView,
) -> OverviewKpis {
    OverviewKpis {
        athletes: athletes.height(),
        countries: nocs.height(),
        sports: distinct_count(events, CanonicalField::Sport).unwrap_or(0),
        medals: medal_type_totals(medals).total(),
        events: events.height(),
    }
}
