use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the three medal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MedalKind {
    Gold,
    Silver,
    Bronze,
}

impl MedalKind {
    /// All kinds in podium order.
    pub const ALL: [MedalKind; 3] = [MedalKind::Gold, MedalKind::Silver, MedalKind::Bronze];

    /// Stable display/key name ("Gold", "Silver", "Bronze").
    pub fn label(self) -> &'static str {
        match self {
            MedalKind::Gold => "Gold",
            MedalKind::Silver => "Silver",
            MedalKind::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for MedalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts "Gold", "gold", "Gold Medal", "G" and the like.
impl FromStr for MedalKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let word = normalized
            .strip_suffix(" medal")
            .unwrap_or(normalized.as_str());
        match word {
            "gold" | "g" => Ok(MedalKind::Gold),
            "silver" | "s" => Ok(MedalKind::Silver),
            "bronze" | "b" => Ok(MedalKind::Bronze),
            _ => Err(ModelError::UnknownMedalKind(s.to_string())),
        }
    }
}
