//! Medal sums, groupings and rankings over a [`MedalView`].

use std::collections::HashMap;

use polars::prelude::DataFrame;
use tracing::debug;

use olympics_common::{column_numbers, column_text};
use olympics_model::{GroupTotal, HierarchyLeaf, MedalKind, MedalShare, MedalTotals};

use crate::continent::OTHER_CONTINENT;
use crate::filters::MedalView;
use crate::schema::{CanonicalField, resolve_column};

/// Grouping key for [`medal_totals_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Country,
    Continent,
}

impl GroupBy {
    fn field(self) -> CanonicalField {
        match self {
            GroupBy::Country => CanonicalField::Country,
            GroupBy::Continent => CanonicalField::Continent,
        }
    }
}

/// Converts a cell count to a medal tally. Missing, negative and fractional
/// noise collapse to the nearest non-negative integer.
fn tally(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

/// Per-row counts for each included medal column.
fn included_counts(view: &MedalView) -> Vec<(MedalKind, Vec<u64>)> {
    view.medal_columns
        .iter()
        .map(|medal| {
            let counts = column_numbers(&view.table, &medal.column)
                .into_iter()
                .map(tally)
                .collect();
            (medal.kind, counts)
        })
        .collect()
}

/// Sums each included medal column. Excluded kinds stay at zero.
pub fn medal_type_totals(view: &MedalView) -> MedalTotals {
    let mut totals = MedalTotals::default();
    for (kind, counts) in included_counts(view) {
        totals.add(kind, counts.iter().sum());
    }
    totals
}

/// Each kind's count and percentage of all counted medals.
pub fn medal_shares(totals: &MedalTotals) -> Vec<MedalShare> {
    let all = totals.total();
    MedalKind::ALL
        .into_iter()
        .map(|medal| {
            let count = totals.get(medal);
            let percent = if all == 0 {
                0.0
            } else {
                count as f64 * 100.0 / all as f64
            };
            MedalShare {
                medal,
                count,
                percent,
            }
        })
        .collect()
}

/// Accumulates medal totals per key, remembering first-seen order.
#[derive(Debug, Default)]
struct GroupAccumulator {
    index: HashMap<String, usize>,
    groups: Vec<(String, MedalTotals)>,
}

impl GroupAccumulator {
    fn entry(&mut self, key: &str) -> &mut MedalTotals {
        let slot = match self.index.get(key) {
            Some(slot) => *slot,
            None => {
                self.index.insert(key.to_string(), self.groups.len());
                self.groups.push((key.to_string(), MedalTotals::default()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[slot].1
    }

    fn finish(self) -> Vec<GroupTotal> {
        self.groups
            .into_iter()
            .map(|(name, medals)| GroupTotal::new(name, medals))
            .collect()
    }
}

/// Medal totals per country or continent in first-seen order.
///
/// Rows with no group value are skipped. A table without the grouping column
/// yields no groups.
pub fn medal_totals_by(view: &MedalView, group_by: GroupBy) -> Vec<GroupTotal> {
    let Some(column) = resolve_column(&view.table, group_by.field()) else {
        debug!(?group_by, "grouping column missing; no groups");
        return Vec::new();
    };
    let keys = column_text(&view.table, &column);
    let counts = included_counts(view);

    let mut groups = GroupAccumulator::default();
    for (row, key) in keys.iter().enumerate() {
        let Some(key) = key else {
            continue;
        };
        let totals = groups.entry(key);
        for (kind, values) in &counts {
            totals.add(*kind, values[row]);
        }
    }
    groups.finish()
}

/// The `n` groups with the largest totals. Ties keep their input order.
pub fn top_n(groups: &[GroupTotal], n: usize) -> Vec<GroupTotal> {
    let mut ranked = groups.to_vec();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked.truncate(n);
    ranked
}

/// Continent → country → medal-type leaves with a non-zero count.
///
/// Leaves are merged across duplicate rows and emitted in first-seen order.
/// Rows without a continent value fall under [`OTHER_CONTINENT`]; rows
/// without a country are skipped.
pub fn hierarchy_leaves(view: &MedalView) -> Vec<HierarchyLeaf> {
    let table: &DataFrame = &view.table;
    let Some(country_column) = resolve_column(table, CanonicalField::Country) else {
        return Vec::new();
    };
    let countries = column_text(table, &country_column);
    let continents = resolve_column(table, CanonicalField::Continent)
        .map(|column| column_text(table, &column))
        .unwrap_or_else(|| vec![None; table.height()]);
    let counts = included_counts(view);

    let mut index: HashMap<(String, String, MedalKind), usize> = HashMap::new();
    let mut leaves: Vec<HierarchyLeaf> = Vec::new();
    for (row, country) in countries.iter().enumerate() {
        let Some(country) = country else {
            continue;
        };
        let continent = continents[row].as_deref().unwrap_or(OTHER_CONTINENT);
        for (medal, values) in &counts {
            let count = values[row];
            if count == 0 {
                continue;
            }
            let key = (continent.to_string(), country.clone(), *medal);
            match index.get(&key) {
                Some(slot) => leaves[*slot].count += count,
                None => {
                    index.insert(key, leaves.len());
                    leaves.push(HierarchyLeaf {
                        continent: continent.to_string(),
                        country: country.clone(),
                        medal: *medal,
                        count,
                    });
                }
            }
        }
    }
    leaves
}
