//! Athlete demographics: ages and genders.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use polars::prelude::DataFrame;
use tracing::debug;

use olympics_common::column_text;
use olympics_model::{AgeBucket, AgeBucketCount, AgeDistribution, GenderCount};

use crate::schema::{CanonicalField, resolve_column};

/// Year ages are measured against.
pub const REFERENCE_YEAR: i32 = 2024;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Birth year of a `YYYY-MM-DD`, `YYYY/MM/DD` or bare `YYYY` value.
///
/// A trailing time component (`1990-04-01 00:00:00`) is ignored.
pub fn parse_birth_year(value: &str) -> Option<i32> {
    let value = value.trim();
    let date_part = value.split_whitespace().next().unwrap_or(value);
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return Some(date.year());
        }
    }
    if date_part.len() == 4 && date_part.bytes().all(|b| b.is_ascii_digit()) {
        return date_part.parse().ok();
    }
    None
}

/// Age in [`REFERENCE_YEAR`] for a birth date value.
pub fn age_from_birth_date(value: &str) -> Option<i32> {
    parse_birth_year(value).map(|year| REFERENCE_YEAR - year)
}

/// Bucketed ages of the athletes in `table`.
///
/// Rows with a missing or unparseable birth date, or an age outside
/// [`AgeBucket::MIN_AGE`]..=[`AgeBucket::MAX_AGE`], are counted as excluded.
pub fn age_distribution(table: &DataFrame) -> AgeDistribution {
    let mut distribution = AgeDistribution::default();
    let Some(column) = resolve_column(table, CanonicalField::BirthDate) else {
        distribution.excluded = table.height();
        return distribution;
    };

    let mut counts: HashMap<AgeBucket, usize> = HashMap::new();
    let mut age_sum: i64 = 0;
    for value in column_text(table, &column) {
        let bucketed = value
            .as_deref()
            .and_then(age_from_birth_date)
            .and_then(|age| AgeBucket::from_age(age).map(|bucket| (age, bucket)));
        match bucketed {
            Some((age, bucket)) => {
                *counts.entry(bucket).or_default() += 1;
                age_sum += i64::from(age);
                distribution.counted += 1;
            }
            None => distribution.excluded += 1,
        }
    }

    distribution.buckets = AgeBucket::ALL
        .into_iter()
        .map(|age_group| AgeBucketCount {
            age_group,
            count: counts.get(&age_group).copied().unwrap_or(0),
        })
        .collect();
    if distribution.counted > 0 {
        distribution.mean_age = Some(age_sum as f64 / distribution.counted as f64);
    }
    debug!(
        counted = distribution.counted,
        excluded = distribution.excluded,
        "computed age distribution"
    );
    distribution
}

/// Maps `M`/`F` codes (any case) to `Male`/`Female`; other values pass
/// through unchanged.
pub fn normalize_gender(raw: &str) -> String {
    match raw {
        "M" | "m" => "Male".to_string(),
        "F" | "f" => "Female".to_string(),
        other => other.to_string(),
    }
}

/// Athlete counts per normalized gender, first-seen order.
pub fn gender_split(table: &DataFrame) -> Vec<GenderCount> {
    let Some(column) = resolve_column(table, CanonicalField::Gender) else {
        return Vec::new();
    };
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut split: Vec<GenderCount> = Vec::new();
    for raw in column_text(table, &column).into_iter().flatten() {
        let gender = normalize_gender(&raw);
        match index.get(&gender) {
            Some(slot) => split[*slot].count += 1,
            None => {
                index.insert(gender.clone(), split.len());
                split.push(GenderCount { gender, count: 1 });
            }
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn athletes(birth_dates: Vec<Option<&str>>) -> DataFrame {
        let columns: Vec<Column> =
            vec![Series::new("birth_date".into(), birth_dates).into_column()];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn birth_year_formats() {
        assert_eq!(parse_birth_year("1998-07-14"), Some(1998));
        assert_eq!(parse_birth_year("1998/07/14"), Some(1998));
        assert_eq!(parse_birth_year("1998"), Some(1998));
        assert_eq!(parse_birth_year("1998-07-14 00:00:00"), Some(1998));
        assert_eq!(parse_birth_year("14.07.1998"), None);
        assert_eq!(parse_birth_year("1998-02-30"), None);
        assert_eq!(parse_birth_year(""), None);
    }

    #[test]
    fn age_twenty_is_in_second_bucket() {
        let dist = athletes_dist(&["2004-01-01"]);
        assert_eq!(dist.count(AgeBucket::From20To25), 1);
        assert_eq!(dist.count(AgeBucket::From10To20), 0);
    }

    #[test]
    fn out_of_range_ages_are_excluded() {
        // Ages 9 and 61.
        let dist = athletes_dist(&["2015-05-05", "1963-05-05"]);
        assert_eq!(dist.counted, 0);
        assert_eq!(dist.excluded, 2);
        assert_eq!(dist.mean_age, None);
    }

    #[test]
    fn sixty_is_included() {
        let dist = athletes_dist(&["1964-01-01"]);
        assert_eq!(dist.count(AgeBucket::From50To60), 1);
    }

    #[test]
    fn unparseable_dates_are_excluded_not_zero() {
        let df = athletes(vec![Some("1994-03-03"), Some("unknown"), None]);
        let dist = age_distribution(&df);
        assert_eq!(dist.counted, 1);
        assert_eq!(dist.excluded, 2);
        assert_eq!(dist.count(AgeBucket::From30To35), 1);
        assert_eq!(dist.mean_age, Some(30.0));
    }

    #[test]
    fn missing_birth_column_excludes_all_rows() {
        let columns: Vec<Column> = vec![Series::new("name".into(), vec!["A", "B"]).into_column()];
        let df = DataFrame::new(columns).unwrap();
        let dist = age_distribution(&df);
        assert_eq!(dist.excluded, 2);
        assert_eq!(dist.buckets.len(), AgeBucket::ALL.len());
    }

    fn athletes_dist(dates: &[&str]) -> AgeDistribution {
        age_distribution(&athletes(dates.iter().map(|d| Some(*d)).collect()))
    }

    #[test]
    fn gender_codes_normalize() {
        let normalized: Vec<String> = ["M", "F", "m", "Unknown"]
            .into_iter()
            .map(normalize_gender)
            .collect();
        assert_eq!(normalized, ["Male", "Female", "Male", "Unknown"]);
    }

    #[test]
    fn gender_split_counts_in_first_seen_order() {
        let columns: Vec<Column> = vec![
            Series::new("gender".into(), vec![Some("F"), Some("M"), Some("m"), None, Some("X")])
                .into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let split = gender_split(&df);

        assert_eq!(
            split,
            vec![
                GenderCount {
                    gender: "Female".to_string(),
                    count: 1
                },
                GenderCount {
                    gender: "Male".to_string(),
                    count: 2
                },
                GenderCount {
                    gender: "X".to_string(),
                    count: 1
                },
            ]
        );
    }
}
