//! Dashboard page pipelines.
//!
//! Each page is a pure function of the catalog and a filter snapshot:
//! filter the tables it needs, then aggregate.

use tracing::debug;

use olympics_ingest::Catalog;
use olympics_model::{AthleteReport, FilterState, GlobalReport, OverviewReport, SportsReport};

use crate::aggregate::{
    GroupBy, age_distribution, count_by, distinct_count, distinct_values, gender_split,
    hierarchy_leaves, medal_shares, medal_totals_by, medal_type_totals, medals_by_discipline,
    event_details, overview_kpis, schedule_entries, top_n, venue_entries,
};
use crate::error::Result;
use crate::filters::{
    MedalView, filter_athletes, filter_events, filter_medals, filter_nocs, filter_schedules,
};
use crate::schema::CanonicalField;

/// Rows kept in the events detail listing.
const EVENT_DETAIL_ROWS: usize = 50;

/// How many rows ranked lists keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub top_countries: usize,
    pub top_sports: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            top_countries: 10,
            top_sports: 15,
        }
    }
}

fn medal_view(catalog: &Catalog, filters: &FilterState) -> Result<MedalView> {
    filter_medals(
        catalog.medals_total(),
        filters.medals,
        &filters.countries,
        &filters.continents,
    )
}

/// KPIs, medal type shares and the leading countries.
pub fn overview(
    catalog: &Catalog,
    filters: &FilterState,
    limits: PageLimits,
) -> Result<OverviewReport> {
    let medals = medal_view(catalog, filters)?;
    let athletes = filter_athletes(
        catalog.athletes(),
        &filters.countries,
        &filters.sports,
        &filters.continents,
    )?;
    let nocs = filter_nocs(catalog.nocs(), &filters.countries)?;
    let events = filter_events(catalog.events(), &filters.sports, &filters.countries)?;

    let kpis = overview_kpis(&athletes, &nocs, &events, &medals);
    let medal_totals = medal_type_totals(&medals);
    let countries = medal_totals_by(&medals, GroupBy::Country);
    debug!(?kpis, "built overview page");

    Ok(OverviewReport {
        kpis,
        shares: medal_shares(&medal_totals),
        medal_totals,
        top_countries: top_n(&countries, limits.top_countries),
    })
}

/// Continental totals, leading countries and the continent hierarchy.
pub fn global(
    catalog: &Catalog,
    filters: &FilterState,
    limits: PageLimits,
) -> Result<GlobalReport> {
    let medals = medal_view(catalog, filters)?;
    let continents = medal_totals_by(&medals, GroupBy::Continent);
    let countries = medal_totals_by(&medals, GroupBy::Country);

    Ok(GlobalReport {
        continents: top_n(&continents, continents.len()),
        top_countries: top_n(&countries, limits.top_countries),
        hierarchy: hierarchy_leaves(&medals),
    })
}

/// Athlete demographics.
pub fn athletes(
    catalog: &Catalog,
    filters: &FilterState,
    limits: PageLimits,
) -> Result<AthleteReport> {
    let athletes = filter_athletes(
        catalog.athletes(),
        &filters.countries,
        &filters.sports,
        &filters.continents,
    )?;

    let mut top_countries = count_by(&athletes, CanonicalField::Country);
    top_countries.truncate(limits.top_countries);
    let mut top_sports = count_by(&athletes, CanonicalField::Sport);
    if top_sports.is_empty() {
        top_sports = count_by(&athletes, CanonicalField::Discipline);
    }
    top_sports.truncate(limits.top_sports);

    Ok(AthleteReport {
        athletes: athletes.height(),
        genders: gender_split(&athletes),
        ages: age_distribution(&athletes),
        top_countries,
        top_sports,
    })
}

/// Sport and event breakdowns plus the schedule of one sport.
///
/// Without `schedule_sport` the first sport offered by the schedule table is
/// shown.
pub fn sports(
    catalog: &Catalog,
    filters: &FilterState,
    limits: PageLimits,
    schedule_sport: Option<&str>,
) -> Result<SportsReport> {
    let events = filter_events(catalog.events(), &filters.sports, &filters.countries)?;
    let mut events_by_sport = count_by(&events, CanonicalField::Sport);
    events_by_sport.truncate(limits.top_sports);

    let medals = filter_medals(
        catalog.medals(),
        filters.medals,
        &filters.countries,
        &filters.continents,
    )?;
    let medals_by_discipline = medals_by_discipline(&medals.table, filters.medals);

    let schedules = catalog.schedules();
    let schedule_sport = match schedule_sport {
        Some(sport) => Some(sport.to_string()),
        None => distinct_values(schedules, CanonicalField::Sport)
            .into_iter()
            .next()
            .or_else(|| {
                distinct_values(schedules, CanonicalField::Discipline)
                    .into_iter()
                    .next()
            }),
    };
    let schedule = match schedule_sport.as_deref() {
        Some(sport) => schedule_entries(&filter_schedules(schedules, Some(sport))?),
        None => Vec::new(),
    };

    Ok(SportsReport {
        sports: distinct_count(&events, CanonicalField::Sport).unwrap_or(0),
        events: events.height(),
        disciplines: distinct_count(&events, CanonicalField::Discipline),
        sport_names: distinct_values(&events, CanonicalField::Sport),
        events_by_sport,
        event_details: event_details(&events, EVENT_DETAIL_ROWS),
        medals_by_discipline,
        venues: catalog.venues().height(),
        venue_sports: distinct_count(catalog.venues(), CanonicalField::VenueSports),
        venue_list: venue_entries(catalog.venues()),
        schedule_sport,
        schedule,
    })
}
