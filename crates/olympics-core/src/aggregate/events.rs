//! Category counts, distinct values and event-level medal breakdowns.

use std::collections::HashMap;

use polars::prelude::DataFrame;

use olympics_common::{column_text, distinct_sorted};
use olympics_model::{
    CategoryCount, DisciplineMedals, EventEntry, MedalFlags, MedalKind, MedalTotals,
    ScheduleEntry, VenueEntry,
};

use crate::schema::{CanonicalField, resolve_column};

/// Row counts per value of `field`, descending. Ties keep first-seen order.
///
/// Rows with no value are skipped; an absent field yields no counts.
pub fn count_by(table: &DataFrame, field: CanonicalField) -> Vec<CategoryCount> {
    let Some(column) = resolve_column(table, field) else {
        return Vec::new();
    };
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for value in column_text(table, &column).into_iter().flatten() {
        match index.get(&value) {
            Some(slot) => counts[*slot].count += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push(CategoryCount { value, count: 1 });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Sorted unique values of `field`.
pub fn distinct_values(table: &DataFrame, field: CanonicalField) -> Vec<String> {
    resolve_column(table, field)
        .map(|column| distinct_sorted(table, &column))
        .unwrap_or_default()
}

/// Number of distinct values of `field`, `None` when the field is absent.
pub fn distinct_count(table: &DataFrame, field: CanonicalField) -> Option<usize> {
    resolve_column(table, field).map(|column| distinct_sorted(table, &column).len())
}

/// Medals per discipline from the per-medal table, split by medal type.
///
/// Rows whose medal type is unknown or excluded by `flags` are skipped.
/// Disciplines are ordered by total, descending, ties in first-seen order.
pub fn medals_by_discipline(medals: &DataFrame, flags: MedalFlags) -> Vec<DisciplineMedals> {
    let (Some(discipline_column), Some(type_column)) = (
        resolve_column(medals, CanonicalField::Discipline),
        resolve_column(medals, CanonicalField::MedalType),
    ) else {
        return Vec::new();
    };
    let disciplines = column_text(medals, &discipline_column);
    let medal_types = column_text(medals, &type_column);

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<(String, MedalTotals)> = Vec::new();
    for (discipline, medal_type) in disciplines.into_iter().zip(medal_types) {
        let (Some(discipline), Some(medal_type)) = (discipline, medal_type) else {
            continue;
        };
        let Ok(kind) = medal_type.parse::<MedalKind>() else {
            continue;
        };
        if !flags.includes(kind) {
            continue;
        }
        let slot = match index.get(&discipline) {
            Some(slot) => *slot,
            None => {
                index.insert(discipline.clone(), rows.len());
                rows.push((discipline, MedalTotals::default()));
                rows.len() - 1
            }
        };
        rows[slot].1.add(kind, 1);
    }

    let mut result: Vec<DisciplineMedals> = rows
        .into_iter()
        .map(|(discipline, medals)| DisciplineMedals {
            discipline,
            total: medals.total(),
            medals,
        })
        .collect();
    result.sort_by(|a, b| b.total.cmp(&a.total));
    result
}

/// Values of `field`, one `None` per row when the field is absent.
fn field_text(table: &DataFrame, field: CanonicalField) -> Vec<Option<String>> {
    resolve_column(table, field)
        .map(|column| column_text(table, &column))
        .unwrap_or_else(|| vec![None; table.height()])
}

/// Schedule rows with an event name, in table order.
pub fn schedule_entries(schedules: &DataFrame) -> Vec<ScheduleEntry> {
    let Some(event_column) = resolve_column(schedules, CanonicalField::Event) else {
        return Vec::new();
    };
    let venues = field_text(schedules, CanonicalField::Venue);
    let starts = field_text(schedules, CanonicalField::StartDate);
    let ends = field_text(schedules, CanonicalField::EndDate);

    column_text(schedules, &event_column)
        .into_iter()
        .enumerate()
        .filter_map(|(row, event)| {
            event.map(|event| ScheduleEntry {
                event,
                venue: venues[row].clone(),
                start: starts[row].clone(),
                end: ends[row].clone(),
            })
        })
        .collect()
}

/// The first `limit` event rows carrying a sport or an event name.
pub fn event_details(events: &DataFrame, limit: usize) -> Vec<EventEntry> {
    let sports = field_text(events, CanonicalField::Sport);
    let names = field_text(events, CanonicalField::Event);
    sports
        .into_iter()
        .zip(names)
        .filter(|(sport, event)| sport.is_some() || event.is_some())
        .take(limit)
        .map(|(sport, event)| EventEntry { sport, event })
        .collect()
}

/// Venue rows carrying a name or a sports list, in table order.
pub fn venue_entries(venues: &DataFrame) -> Vec<VenueEntry> {
    let names = field_text(venues, CanonicalField::VenueName);
    let sports = field_text(venues, CanonicalField::VenueSports);
    names
        .into_iter()
        .zip(sports)
        .filter(|(name, sports)| name.is_some() || sports.is_some())
        .map(|(name, sports)| VenueEntry { name, sports })
        .collect()
}
