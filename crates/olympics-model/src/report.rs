//! Aggregate results handed to the presentation layer.
//!
//! Every struct here is fully determined by a filtered table and the kind of
//! aggregation that produced it. Serialized key names are stable.

use serde::{Deserialize, Serialize};

use crate::medal::MedalKind;

/// Gold/silver/bronze counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTotals {
    #[serde(rename = "Gold")]
    pub gold: u64,
    #[serde(rename = "Silver")]
    pub silver: u64,
    #[serde(rename = "Bronze")]
    pub bronze: u64,
}

impl MedalTotals {
    pub fn get(&self, kind: MedalKind) -> u64 {
        match kind {
            MedalKind::Gold => self.gold,
            MedalKind::Silver => self.silver,
            MedalKind::Bronze => self.bronze,
        }
    }

    pub fn add(&mut self, kind: MedalKind, count: u64) {
        match kind {
            MedalKind::Gold => self.gold += count,
            MedalKind::Silver => self.silver += count,
            MedalKind::Bronze => self.bronze += count,
        }
    }

    pub fn total(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }
}

/// One medal kind's count and share of all counted medals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedalShare {
    pub medal: MedalKind,
    pub count: u64,
    pub percent: f64,
}

/// Medal counts for one country or continent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub name: String,
    #[serde(flatten)]
    pub medals: MedalTotals,
    #[serde(rename = "Total")]
    pub total: u64,
}

impl GroupTotal {
    pub fn new(name: impl Into<String>, medals: MedalTotals) -> Self {
        Self {
            name: name.into(),
            total: medals.total(),
            medals,
        }
    }
}

/// A continent → country → medal-type leaf with a non-zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyLeaf {
    pub continent: String,
    pub country: String,
    pub medal: MedalKind,
    pub count: u64,
}

/// Fixed age ranges. All are half-open except the last, which includes 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBucket {
    #[serde(rename = "10-19")]
    From10To20,
    #[serde(rename = "20-24")]
    From20To25,
    #[serde(rename = "25-29")]
    From25To30,
    #[serde(rename = "30-34")]
    From30To35,
    #[serde(rename = "35-39")]
    From35To40,
    #[serde(rename = "40-49")]
    From40To50,
    #[serde(rename = "50-60")]
    From50To60,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 7] = [
        AgeBucket::From10To20,
        AgeBucket::From20To25,
        AgeBucket::From25To30,
        AgeBucket::From30To35,
        AgeBucket::From35To40,
        AgeBucket::From40To50,
        AgeBucket::From50To60,
    ];

    /// Youngest age counted in statistics.
    pub const MIN_AGE: i32 = 10;
    /// Oldest age counted in statistics (inclusive).
    pub const MAX_AGE: i32 = 60;

    /// Bucket for `age`, or `None` when outside `[10, 60]`.
    pub fn from_age(age: i32) -> Option<Self> {
        match age {
            10..=19 => Some(AgeBucket::From10To20),
            20..=24 => Some(AgeBucket::From20To25),
            25..=29 => Some(AgeBucket::From25To30),
            30..=34 => Some(AgeBucket::From30To35),
            35..=39 => Some(AgeBucket::From35To40),
            40..=49 => Some(AgeBucket::From40To50),
            50..=60 => Some(AgeBucket::From50To60),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBucket::From10To20 => "10-19",
            AgeBucket::From20To25 => "20-24",
            AgeBucket::From25To30 => "25-29",
            AgeBucket::From30To35 => "30-34",
            AgeBucket::From35To40 => "35-39",
            AgeBucket::From40To50 => "40-49",
            AgeBucket::From50To60 => "50-60",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBucketCount {
    pub age_group: AgeBucket,
    pub count: usize,
}

/// Age histogram over rows with a usable birth date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    /// One entry per bucket, in age order, zero counts included.
    pub buckets: Vec<AgeBucketCount>,
    /// Rows that contributed an age.
    pub counted: usize,
    /// Rows with a missing/unparseable birth date or an age outside range.
    pub excluded: usize,
    pub mean_age: Option<f64>,
}

impl Default for AgeDistribution {
    fn default() -> Self {
        Self {
            buckets: AgeBucket::ALL
                .into_iter()
                .map(|age_group| AgeBucketCount {
                    age_group,
                    count: 0,
                })
                .collect(),
            counted: 0,
            excluded: 0,
            mean_age: None,
        }
    }
}

impl AgeDistribution {
    pub fn count(&self, bucket: AgeBucket) -> usize {
        self.buckets
            .iter()
            .find(|entry| entry.age_group == bucket)
            .map_or(0, |entry| entry.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCount {
    pub gender: String,
    pub count: usize,
}

/// Number of rows carrying a given value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineMedals {
    pub discipline: String,
    #[serde(flatten)]
    pub medals: MedalTotals,
    #[serde(rename = "Total")]
    pub total: u64,
}

/// Headline numbers shown at the top of the overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewKpis {
    pub athletes: usize,
    pub countries: usize,
    pub sports: usize,
    pub medals: u64,
    pub events: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewReport {
    pub kpis: OverviewKpis,
    pub medal_totals: MedalTotals,
    pub shares: Vec<MedalShare>,
    pub top_countries: Vec<GroupTotal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalReport {
    pub continents: Vec<GroupTotal>,
    pub top_countries: Vec<GroupTotal>,
    pub hierarchy: Vec<HierarchyLeaf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteReport {
    pub athletes: usize,
    pub genders: Vec<GenderCount>,
    pub ages: AgeDistribution,
    pub top_countries: Vec<CategoryCount>,
    pub top_sports: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub event: String,
    pub venue: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One row of the events detail listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    pub sport: Option<String>,
    pub event: Option<String>,
}

/// One row of the venue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueEntry {
    pub name: Option<String>,
    pub sports: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportsReport {
    pub sports: usize,
    pub events: usize,
    /// `None` when the events table has no discipline column.
    pub disciplines: Option<usize>,
    pub sport_names: Vec<String>,
    pub events_by_sport: Vec<CategoryCount>,
    pub event_details: Vec<EventEntry>,
    pub medals_by_discipline: Vec<DisciplineMedals>,
    pub venues: usize,
    /// Distinct `sports` values across venues, `None` without that column.
    pub venue_sports: Option<usize>,
    pub venue_list: Vec<VenueEntry>,
    pub schedule_sport: Option<String>,
    pub schedule: Vec<ScheduleEntry>,
}
