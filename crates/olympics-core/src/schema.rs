//! Canonical field resolution.
//!
//! Source tables spell the same concept differently (`country_long` vs
//! `country`, `Gold Medal` vs `gold`). Each [`CanonicalField`] carries a fixed
//! candidate list tried in priority order; the first physical column that
//! matches wins. Absence is a normal outcome, never an error.

use polars::prelude::DataFrame;

use olympics_model::{CaseInsensitiveSet, MedalKind};

/// A logical concept that may be stored under different column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Country,
    CountryCode,
    Continent,
    Sport,
    Discipline,
    Event,
    Gold,
    Silver,
    Bronze,
    Total,
    Gender,
    BirthDate,
    MedalType,
    /// Any column whose name mentions "country"; event tables vary too much
    /// for a fixed list.
    EventCountry,
    Venue,
    StartDate,
    EndDate,
    /// Venue name in the venues table.
    VenueName,
    /// Sports hosted, as listed in the venues table.
    VenueSports,
}

/// How a field's candidates are compared with physical column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Case-sensitive, candidates in priority order.
    Exact(&'static [&'static str]),
    /// Case-insensitive, candidates in priority order.
    CaseInsensitive(&'static [&'static str]),
    /// First column in table order whose lowercased name contains the needle.
    Contains(&'static str),
}

impl CanonicalField {
    pub fn rule(self) -> NameMatch {
        match self {
            CanonicalField::Country => NameMatch::Exact(&["country_long", "country"]),
            CanonicalField::CountryCode => NameMatch::Exact(&["country_code", "code"]),
            CanonicalField::Continent => NameMatch::Exact(&["continent"]),
            CanonicalField::Sport => NameMatch::CaseInsensitive(&["sport"]),
            CanonicalField::Discipline => {
                NameMatch::CaseInsensitive(&["discipline", "disciplines"])
            }
            CanonicalField::Event => NameMatch::CaseInsensitive(&["event"]),
            CanonicalField::Gold => NameMatch::Exact(&["Gold Medal", "gold", "gold_medals"]),
            CanonicalField::Silver => {
                NameMatch::Exact(&["Silver Medal", "silver", "silver_medals"])
            }
            CanonicalField::Bronze => {
                NameMatch::Exact(&["Bronze Medal", "bronze", "bronze_medals"])
            }
            CanonicalField::Total => NameMatch::Exact(&["Total", "total", "total_medals"]),
            CanonicalField::Gender => NameMatch::Exact(&["gender"]),
            CanonicalField::BirthDate => NameMatch::Exact(&["birth_date"]),
            CanonicalField::MedalType => NameMatch::Exact(&["medal_type"]),
            CanonicalField::EventCountry => NameMatch::Contains("country"),
            CanonicalField::Venue => NameMatch::CaseInsensitive(&["venue"]),
            CanonicalField::StartDate => NameMatch::Exact(&["start_date"]),
            CanonicalField::EndDate => NameMatch::Exact(&["end_date"]),
            CanonicalField::VenueName => NameMatch::Exact(&["name", "venue"]),
            CanonicalField::VenueSports => NameMatch::Exact(&["sports"]),
        }
    }

    /// The count column field for a medal kind.
    pub fn medal(kind: MedalKind) -> Self {
        match kind {
            MedalKind::Gold => CanonicalField::Gold,
            MedalKind::Silver => CanonicalField::Silver,
            MedalKind::Bronze => CanonicalField::Bronze,
        }
    }
}

/// Resolves `field` against an ordered list of column names.
pub fn resolve_in<S: AsRef<str>>(columns: &[S], field: CanonicalField) -> Option<String> {
    match field.rule() {
        NameMatch::Exact(candidates) => candidates
            .iter()
            .find(|candidate| columns.iter().any(|c| c.as_ref() == **candidate))
            .map(|candidate| (*candidate).to_string()),
        NameMatch::CaseInsensitive(candidates) => {
            let lookup = CaseInsensitiveSet::new(columns.iter().map(|c| c.as_ref()));
            candidates
                .iter()
                .find_map(|candidate| lookup.get(candidate))
                .map(str::to_string)
        }
        NameMatch::Contains(needle) => columns
            .iter()
            .map(|c| c.as_ref())
            .find(|name| name.to_ascii_lowercase().contains(needle))
            .map(str::to_string),
    }
}

/// Resolves `field` against a table's columns.
pub fn resolve_column(df: &DataFrame, field: CanonicalField) -> Option<String> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    resolve_in(&names, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_prefers_long_name() {
        assert_eq!(
            resolve_in(&["country", "country_long"], CanonicalField::Country),
            Some("country_long".to_string())
        );
        assert_eq!(
            resolve_in(&["code", "country"], CanonicalField::Country),
            Some("country".to_string())
        );
    }

    #[test]
    fn exact_rules_are_case_sensitive() {
        assert_eq!(resolve_in(&["Country"], CanonicalField::Country), None);
        assert_eq!(resolve_in(&["GOLD"], CanonicalField::Gold), None);
    }

    #[test]
    fn gold_candidate_priority() {
        assert_eq!(
            resolve_in(&["gold_medals", "gold", "Gold Medal"], CanonicalField::Gold),
            Some("Gold Medal".to_string())
        );
        assert_eq!(
            resolve_in(&["gold_medals", "gold"], CanonicalField::Gold),
            Some("gold".to_string())
        );
        assert_eq!(
            resolve_in(&["gold_medals"], CanonicalField::Gold),
            Some("gold_medals".to_string())
        );
    }

    #[test]
    fn sport_ignores_case_and_keeps_spelling() {
        assert_eq!(
            resolve_in(&["event", "Sport"], CanonicalField::Sport),
            Some("Sport".to_string())
        );
        assert_eq!(
            resolve_in(&["SPORT", "sport"], CanonicalField::Sport),
            Some("SPORT".to_string())
        );
    }

    #[test]
    fn event_country_matches_substring_in_table_order() {
        assert_eq!(
            resolve_in(
                &["event", "Host_Country_Code", "country_long"],
                CanonicalField::EventCountry
            ),
            Some("Host_Country_Code".to_string())
        );
        assert_eq!(resolve_in(&["event", "sport"], CanonicalField::EventCountry), None);
    }

    #[test]
    fn absent_field_is_none() {
        let empty: [&str; 0] = [];
        assert_eq!(resolve_in(&empty, CanonicalField::Continent), None);
        assert_eq!(resolve_in(&["name"], CanonicalField::BirthDate), None);
    }

    #[test]
    fn venue_columns() {
        let columns = ["venue", "sports", "tag"];
        assert_eq!(
            resolve_in(&columns, CanonicalField::VenueSports),
            Some("sports".to_string())
        );
        assert_eq!(resolve_in(&columns, CanonicalField::Sport), None);
        assert_eq!(
            resolve_in(&columns, CanonicalField::VenueName),
            Some("venue".to_string())
        );
        assert_eq!(
            resolve_in(&["venue", "name"], CanonicalField::VenueName),
            Some("name".to_string())
        );
    }

    #[test]
    fn medal_fields_map_to_kinds() {
        assert_eq!(CanonicalField::medal(MedalKind::Silver), CanonicalField::Silver);
    }
}
