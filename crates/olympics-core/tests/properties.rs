//! Property tests for the table filters.

use olympics_common::column_text;
use olympics_core::aggregate::medal_type_totals;
use olympics_core::{filter_athletes, filter_medals};
use olympics_model::{MedalFlags, Selection};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

const COUNTRIES: [&str; 4] = ["FRA", "USA", "JPN", "KEN"];
const SPORTS: [&str; 3] = ["Judo", "Rowing", "Golf"];
const CONTINENTS: [&str; 3] = ["Europe", "Asia", "Africa"];

#[derive(Debug, Clone)]
struct Row {
    country: usize,
    sport: usize,
    continent: usize,
    gold: i64,
    silver: i64,
    bronze: i64,
}

fn row() -> impl Strategy<Value = Row> {
    (0..COUNTRIES.len(), 0..SPORTS.len(), 0..CONTINENTS.len(), 0..20i64, 0..20i64, 0..20i64)
        .prop_map(|(country, sport, continent, gold, silver, bronze)| Row {
            country,
            sport,
            continent,
            gold,
            silver,
            bronze,
        })
}

fn table(rows: &[Row]) -> DataFrame {
    let pick = |values: &[&'static str], idx: Vec<usize>| -> Vec<&'static str> {
        idx.into_iter().map(|i| values[i]).collect()
    };
    DataFrame::new(vec![
        Series::new(
            "country".into(),
            pick(&COUNTRIES, rows.iter().map(|r| r.country).collect()),
        )
        .into_column(),
        Series::new(
            "sport".into(),
            pick(&SPORTS, rows.iter().map(|r| r.sport).collect()),
        )
        .into_column(),
        Series::new(
            "continent".into(),
            pick(&CONTINENTS, rows.iter().map(|r| r.continent).collect()),
        )
        .into_column(),
        Series::new("gold".into(), rows.iter().map(|r| r.gold).collect::<Vec<_>>()).into_column(),
        Series::new("silver".into(), rows.iter().map(|r| r.silver).collect::<Vec<_>>())
            .into_column(),
        Series::new("bronze".into(), rows.iter().map(|r| r.bronze).collect::<Vec<_>>())
            .into_column(),
    ])
    .unwrap()
}

fn selection(values: &'static [&'static str]) -> impl Strategy<Value = Selection> {
    proptest::sample::subsequence(values.to_vec(), 0..=values.len())
        .prop_map(|picked| picked.into_iter().collect())
}

fn medal_flags() -> impl Strategy<Value = MedalFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(gold, silver, bronze)| MedalFlags {
        gold,
        silver,
        bronze,
    })
}

/// Each row rendered as a single string so row multisets can be compared.
fn row_keys(df: &DataFrame) -> Vec<String> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let columns: Vec<Vec<Option<String>>> =
        names.iter().map(|name| column_text(df, name)).collect();
    (0..df.height())
        .map(|row| {
            columns
                .iter()
                .map(|values| values[row].clone().unwrap_or_default())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect()
}

proptest! {
    #[test]
    fn athletes_filter_yields_subset(
        rows in prop::collection::vec(row(), 0..30),
        countries in selection(&COUNTRIES),
        sports in selection(&SPORTS),
        continents in selection(&CONTINENTS)
    ) {
        let df = table(&rows);
        let filtered = filter_athletes(&df, &countries, &sports, &continents).unwrap();

        prop_assert!(filtered.height() <= df.height());
        let all = row_keys(&df);
        for key in row_keys(&filtered) {
            prop_assert!(all.contains(&key));
        }
    }

    #[test]
    fn athletes_filter_is_idempotent(
        rows in prop::collection::vec(row(), 0..30),
        countries in selection(&COUNTRIES),
        sports in selection(&SPORTS),
        continents in selection(&CONTINENTS)
    ) {
        let df = table(&rows);
        let once = filter_athletes(&df, &countries, &sports, &continents).unwrap();
        let twice = filter_athletes(&once, &countries, &sports, &continents).unwrap();

        prop_assert!(once.equals_missing(&twice));
    }

    #[test]
    fn empty_selections_are_inert(rows in prop::collection::vec(row(), 1..30)) {
        let df = table(&rows);
        let empty = Selection::new();

        let athletes = filter_athletes(&df, &empty, &empty, &empty).unwrap();
        let medals = filter_medals(&df, MedalFlags::default(), &empty, &empty).unwrap();

        prop_assert_eq!(athletes.height(), df.height());
        prop_assert_eq!(medals.table.height(), df.height());
    }

    #[test]
    fn medal_filter_order_does_not_change_totals(
        rows in prop::collection::vec(row(), 0..30),
        flags in medal_flags(),
        countries in selection(&COUNTRIES),
        continents in selection(&CONTINENTS)
    ) {
        let df = table(&rows);
        let none = Selection::new();

        let together = filter_medals(&df, flags, &countries, &continents).unwrap();

        let by_country = filter_medals(&df, flags, &countries, &none).unwrap();
        let country_then_continent =
            filter_medals(&by_country.table, flags, &none, &continents).unwrap();

        let by_continent = filter_medals(&df, flags, &none, &continents).unwrap();
        let continent_then_country =
            filter_medals(&by_continent.table, flags, &countries, &none).unwrap();

        let expected = medal_type_totals(&together);
        prop_assert_eq!(medal_type_totals(&country_then_continent), expected);
        prop_assert_eq!(medal_type_totals(&continent_then_country), expected);
    }
}
