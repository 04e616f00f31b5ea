//! Table filters.
//!
//! One filter per dataset family. Each applies the relevant parts of a
//! [`FilterState`](olympics_model::FilterState) snapshot and returns a new
//! table; inputs are never modified. A selection whose target column is
//! absent from the table has no effect.

use polars::prelude::DataFrame;
use tracing::debug;

use olympics_model::{MedalFlags, MedalKind, Selection};

use crate::error::Result;
use crate::frame::RowMask;
use crate::schema::{CanonicalField, resolve_column};

/// A medal count column that survived the medal-type flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedalColumn {
    pub kind: MedalKind,
    pub column: String,
}

/// A filtered medal table with the medal columns to aggregate over.
#[derive(Debug, Clone)]
pub struct MedalView {
    pub table: DataFrame,
    pub medal_columns: Vec<MedalColumn>,
}

impl MedalView {
    /// Column holding counts for `kind`, if it is included.
    pub fn column_for(&self, kind: MedalKind) -> Option<&str> {
        self.medal_columns
            .iter()
            .find(|medal| medal.kind == kind)
            .map(|medal| medal.column.as_str())
    }
}

/// Medal columns present in `df` whose flag is set, in podium order.
pub fn included_medal_columns(df: &DataFrame, flags: MedalFlags) -> Vec<MedalColumn> {
    flags
        .included()
        .filter_map(|kind| {
            resolve_column(df, CanonicalField::medal(kind)).map(|column| MedalColumn { kind, column })
        })
        .collect()
}

fn log_filtered(table: &'static str, mask: &RowMask) {
    debug!(table, kept = mask.kept(), total = mask.len(), "filtered table");
}

/// Filters a medal table by country and continent and resolves the medal
/// columns allowed by `flags`.
pub fn filter_medals(
    table: &DataFrame,
    flags: MedalFlags,
    countries: &Selection,
    continents: &Selection,
) -> Result<MedalView> {
    let medal_columns = included_medal_columns(table, flags);

    let mut mask = RowMask::keep_all(table);
    let country = resolve_column(table, CanonicalField::Country);
    mask.restrict(table, country.as_deref(), countries);
    let continent = resolve_column(table, CanonicalField::Continent);
    mask.restrict(table, continent.as_deref(), continents);
    log_filtered("medals", &mask);

    Ok(MedalView {
        table: mask.apply(table)?,
        medal_columns,
    })
}

/// Filters an athlete table by country, sport and continent.
pub fn filter_athletes(
    table: &DataFrame,
    countries: &Selection,
    sports: &Selection,
    continents: &Selection,
) -> Result<DataFrame> {
    let mut mask = RowMask::keep_all(table);
    let country = resolve_column(table, CanonicalField::Country);
    mask.restrict(table, country.as_deref(), countries);
    let sport = resolve_column(table, CanonicalField::Sport);
    mask.restrict(table, sport.as_deref(), sports);
    let continent = resolve_column(table, CanonicalField::Continent);
    mask.restrict(table, continent.as_deref(), continents);
    log_filtered("athletes", &mask);

    mask.apply(table)
}

/// Filters an event table by sport and by the first country-like column.
pub fn filter_events(
    table: &DataFrame,
    sports: &Selection,
    countries: &Selection,
) -> Result<DataFrame> {
    let mut mask = RowMask::keep_all(table);
    let sport = resolve_column(table, CanonicalField::Sport);
    mask.restrict(table, sport.as_deref(), sports);
    let country = resolve_column(table, CanonicalField::EventCountry);
    mask.restrict(table, country.as_deref(), countries);
    log_filtered("events", &mask);

    mask.apply(table)
}

/// Filters the NOC table by country.
pub fn filter_nocs(table: &DataFrame, countries: &Selection) -> Result<DataFrame> {
    let mut mask = RowMask::keep_all(table);
    let country = resolve_column(table, CanonicalField::Country);
    mask.restrict(table, country.as_deref(), countries);
    log_filtered("nocs", &mask);

    mask.apply(table)
}

/// Keeps schedule rows for one sport.
///
/// Schedules without a sport column are matched on their discipline. `None`
/// keeps every row.
pub fn filter_schedules(table: &DataFrame, sport: Option<&str>) -> Result<DataFrame> {
    let mut mask = RowMask::keep_all(table);
    let column = resolve_column(table, CanonicalField::Sport)
        .or_else(|| resolve_column(table, CanonicalField::Discipline));
    if let (Some(sport), Some(column)) = (sport, column.as_deref()) {
        mask.restrict_with(table, column, |value| value == Some(sport));
    }
    log_filtered("schedules", &mask);

    mask.apply(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_common::column_text;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn medals() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("country".into(), vec!["FRA", "USA", "JPN"]).into_column(),
            Series::new("continent".into(), vec!["Europe", "North America", "Asia"])
                .into_column(),
            Series::new("gold".into(), vec![5i64, 8, 3]).into_column(),
            Series::new("silver".into(), vec![3i64, 4, 2]).into_column(),
            Series::new("bronze".into(), vec![2i64, 1, 6]).into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    fn selection(values: &[&str]) -> Selection {
        values.iter().copied().collect()
    }

    #[test]
    fn medal_columns_follow_flags() {
        let df = medals();
        let flags = MedalFlags::default().with(MedalKind::Silver, false);

        let view = filter_medals(&df, flags, &Selection::new(), &Selection::new()).unwrap();

        assert_eq!(view.table.height(), 3);
        assert_eq!(view.column_for(MedalKind::Gold), Some("gold"));
        assert_eq!(view.column_for(MedalKind::Silver), None);
        assert_eq!(view.column_for(MedalKind::Bronze), Some("bronze"));
    }

    #[test]
    fn medal_columns_skip_absent_fields() {
        let columns: Vec<Column> =
            vec![Series::new("Gold Medal".into(), vec![1i64]).into_column()];
        let df = DataFrame::new(columns).unwrap();

        let columns = included_medal_columns(&df, MedalFlags::default());

        assert_eq!(
            columns,
            vec![MedalColumn {
                kind: MedalKind::Gold,
                column: "Gold Medal".to_string()
            }]
        );
    }

    #[test]
    fn medals_filter_by_country_and_continent() {
        let df = medals();
        let view = filter_medals(
            &df,
            MedalFlags::default(),
            &selection(&["FRA", "USA"]),
            &selection(&["Europe"]),
        )
        .unwrap();

        assert_eq!(
            column_text(&view.table, "country"),
            vec![Some("FRA".to_string())]
        );
    }

    #[test]
    fn all_continents_sentinel_is_unrestricted() {
        let df = medals();
        let view =
            filter_medals(&df, MedalFlags::default(), &Selection::new(), &selection(&["All"]))
                .unwrap();
        assert_eq!(view.table.height(), 3);
    }

    #[test]
    fn athletes_ignore_filters_without_columns() {
        let columns: Vec<Column> = vec![
            Series::new("name".into(), vec!["A", "B"]).into_column(),
            Series::new("country".into(), vec!["France", "Japan"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let filtered = filter_athletes(
            &df,
            &selection(&["France"]),
            &selection(&["Judo"]),
            &selection(&["Europe"]),
        )
        .unwrap();

        assert_eq!(filtered.height(), 1);
    }

    #[test]
    fn events_match_sport_column_case_insensitively() {
        let columns: Vec<Column> = vec![
            Series::new("Sport".into(), vec!["Judo", "Rowing", "judo"]).into_column(),
            Series::new("event".into(), vec!["-60 kg", "Single Sculls", "-66 kg"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let filtered = filter_events(&df, &selection(&["Judo"]), &Selection::new()).unwrap();

        // Column name matching ignores case; value matching does not.
        assert_eq!(filtered.height(), 1);
    }

    #[test]
    fn events_match_padded_cells_after_trimming() {
        let columns: Vec<Column> = vec![
            Series::new("sport".into(), vec![" Judo ", "Judo", "JUDO "]).into_column(),
            Series::new("event".into(), vec!["a", "b", "c"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let judo = filter_events(&df, &selection(&["Judo"]), &Selection::new()).unwrap();
        let lower = filter_events(&df, &selection(&["judo"]), &Selection::new()).unwrap();

        assert_eq!(
            column_text(&judo, "event"),
            vec![Some("a".to_string()), Some("b".to_string())]
        );
        assert_eq!(lower.height(), 0);
    }

    #[test]
    fn events_use_first_country_like_column() {
        let columns: Vec<Column> = vec![
            Series::new("event".into(), vec!["a", "b"]).into_column(),
            Series::new("host_country".into(), vec!["FRA", "USA"]).into_column(),
            Series::new("country_long".into(), vec!["USA", "FRA"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let filtered = filter_events(&df, &Selection::new(), &selection(&["FRA"])).unwrap();

        assert_eq!(
            column_text(&filtered, "event"),
            vec![Some("a".to_string())]
        );
    }

    #[test]
    fn nocs_filter_by_country() {
        let columns: Vec<Column> = vec![
            Series::new("code".into(), vec!["FRA", "USA"]).into_column(),
            Series::new("country_long".into(), vec!["France", "United States"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let filtered = filter_nocs(&df, &selection(&["France"])).unwrap();

        assert_eq!(filtered.height(), 1);
    }

    #[test]
    fn schedules_fall_back_to_discipline() {
        let columns: Vec<Column> = vec![
            Series::new("discipline".into(), vec!["Judo", "Rowing", "Judo"]).into_column(),
            Series::new("event".into(), vec!["a", "b", "c"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        assert_eq!(filter_schedules(&df, Some("Judo")).unwrap().height(), 2);
        assert_eq!(filter_schedules(&df, None).unwrap().height(), 3);
    }

    #[test]
    fn empty_table_filters_cleanly() {
        let df = DataFrame::default();
        let view = filter_medals(
            &df,
            MedalFlags::default(),
            &selection(&["FRA"]),
            &Selection::new(),
        )
        .unwrap();
        assert_eq!(view.table.height(), 0);
        assert!(view.medal_columns.is_empty());
    }
}
