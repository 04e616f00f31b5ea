//! Shared filter selection.
//!
//! A [`FilterState`] is owned by the session and replaced wholesale by the
//! UI. Every table filter receives an immutable snapshot of it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::medal::MedalKind;

/// Legacy sidebar value meaning "every option".
const ALL_SENTINEL: &str = "All";

/// A set of selected values. An empty selection places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the selection does not restrict anything.
    ///
    /// Both the empty set and the single value `"All"` are unrestricted.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty() || (self.0.len() == 1 && self.0.contains(ALL_SENTINEL))
    }

    /// True if a row carrying `value` passes this selection.
    pub fn permits(&self, value: Option<&str>) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        value.is_some_and(|v| self.0.contains(v))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.0.insert(value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Selection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// Independent inclusion flags for each medal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedalFlags {
    pub gold: bool,
    pub silver: bool,
    pub bronze: bool,
}

impl Default for MedalFlags {
    fn default() -> Self {
        Self {
            gold: true,
            silver: true,
            bronze: true,
        }
    }
}

impl MedalFlags {
    pub fn includes(self, kind: MedalKind) -> bool {
        match kind {
            MedalKind::Gold => self.gold,
            MedalKind::Silver => self.silver,
            MedalKind::Bronze => self.bronze,
        }
    }

    /// Kinds whose flag is set, in podium order.
    pub fn included(self) -> impl Iterator<Item = MedalKind> {
        MedalKind::ALL
            .into_iter()
            .filter(move |kind| self.includes(*kind))
    }

    #[must_use]
    pub fn with(mut self, kind: MedalKind, include: bool) -> Self {
        match kind {
            MedalKind::Gold => self.gold = include,
            MedalKind::Silver => self.silver = include,
            MedalKind::Bronze => self.bronze = include,
        }
        self
    }
}

/// The user's current selection across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub countries: Selection,
    pub sports: Selection,
    pub continents: Selection,
    pub medals: MedalFlags,
}

impl FilterState {
    /// First-load state: every populated continent pre-selected.
    pub fn initial(options: &FilterOptions) -> Self {
        Self {
            continents: options.continents.iter().cloned().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_sports<I, S>(mut self, sports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sports = sports.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_continents<I, S>(mut self, continents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.continents = continents.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_medals(mut self, medals: MedalFlags) -> Self {
        self.medals = medals;
        self
    }
}

/// Values offered by the filter sidebar, derived once from the loaded tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub sports: Vec<String>,
    pub continents: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_permits_everything() {
        let selection = Selection::new();
        assert!(selection.permits(Some("FRA")));
        assert!(selection.permits(None));
    }

    #[test]
    fn all_sentinel_is_unrestricted() {
        let selection: Selection = ["All"].into_iter().collect();
        assert!(selection.is_unrestricted());
        assert!(selection.permits(Some("Europe")));
    }

    #[test]
    fn non_empty_selection_rejects_missing_values() {
        let selection: Selection = ["Europe"].into_iter().collect();
        assert!(selection.permits(Some("Europe")));
        assert!(!selection.permits(Some("Asia")));
        assert!(!selection.permits(None));
    }

    #[test]
    fn medal_flags_default_to_all() {
        let flags = MedalFlags::default();
        assert_eq!(flags.included().count(), 3);
        let flags = flags.with(MedalKind::Silver, false);
        assert_eq!(
            flags.included().collect::<Vec<_>>(),
            vec![MedalKind::Gold, MedalKind::Bronze]
        );
    }

    #[test]
    fn initial_state_selects_populated_continents() {
        let options = FilterOptions {
            countries: vec!["France".to_string()],
            sports: vec![],
            continents: vec!["Europe".to_string(), "Other".to_string()],
        };
        let state = FilterState::initial(&options);
        assert!(state.countries.is_empty());
        assert_eq!(state.continents.len(), 2);
        assert!(state.medals.gold && state.medals.silver && state.medals.bronze);
    }

    #[test]
    fn deserializes_partial_json() {
        let state: FilterState =
            serde_json::from_str(r#"{"countries":["France"],"medals":{"silver":false}}"#).unwrap();
        assert!(state.countries.contains("France"));
        assert!(state.sports.is_empty());
        assert!(state.medals.gold);
        assert!(!state.medals.silver);
    }
}
