use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The fixed set of source tables the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Athletes,
    Coaches,
    Events,
    Medals,
    MedalsTotal,
    Medallists,
    Nocs,
    Schedules,
    Teams,
    TechnicalOfficials,
    Venues,
    TorchRoute,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 12] = [
        DatasetKind::Athletes,
        DatasetKind::Coaches,
        DatasetKind::Events,
        DatasetKind::Medals,
        DatasetKind::MedalsTotal,
        DatasetKind::Medallists,
        DatasetKind::Nocs,
        DatasetKind::Schedules,
        DatasetKind::Teams,
        DatasetKind::TechnicalOfficials,
        DatasetKind::Venues,
        DatasetKind::TorchRoute,
    ];

    /// Table name, which is also the CSV file stem.
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Athletes => "athletes",
            DatasetKind::Coaches => "coaches",
            DatasetKind::Events => "events",
            DatasetKind::Medals => "medals",
            DatasetKind::MedalsTotal => "medals_total",
            DatasetKind::Medallists => "medallists",
            DatasetKind::Nocs => "nocs",
            DatasetKind::Schedules => "schedules",
            DatasetKind::Teams => "teams",
            DatasetKind::TechnicalOfficials => "technical_officials",
            DatasetKind::Venues => "venues",
            DatasetKind::TorchRoute => "torch_route",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stem = s.trim();
        let stem = stem
            .strip_suffix(".csv")
            .or_else(|| stem.strip_suffix(".CSV"))
            .unwrap_or(stem);
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(stem))
            .ok_or_else(|| ModelError::UnknownDataset(s.to_string()))
    }
}
