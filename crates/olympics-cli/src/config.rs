//! Filter state assembly from a JSON file and command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use olympics_model::{FilterState, MedalKind};

/// Selections given on the command line. A non-empty list replaces the
/// matching selection of the base state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOverrides {
    pub countries: Vec<String>,
    pub sports: Vec<String>,
    pub continents: Vec<String>,
    /// Medal kinds switched off.
    pub excluded_medals: Vec<MedalKind>,
}

impl FilterOverrides {
    /// Applies the flags to `base`. Excluded medal kinds are switched off;
    /// kinds not mentioned keep the base flag.
    pub fn apply(&self, mut base: FilterState) -> FilterState {
        if !self.countries.is_empty() {
            base = base.with_countries(self.countries.iter().cloned());
        }
        if !self.sports.is_empty() {
            base = base.with_sports(self.sports.iter().cloned());
        }
        if !self.continents.is_empty() {
            base = base.with_continents(self.continents.iter().cloned());
        }
        for kind in &self.excluded_medals {
            base.medals = base.medals.with(*kind, false);
        }
        base
    }
}

/// Reads a JSON filter state. Omitted keys take their defaults.
pub fn load_filter_file(path: &Path) -> Result<FilterState> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read filter file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse filter file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn overrides_replace_base_selections() {
        let base = FilterState::default()
            .with_countries(["France"])
            .with_continents(["Europe", "Africa"]);
        let overrides = FilterOverrides {
            countries: vec!["Kenya".to_string()],
            excluded_medals: vec![MedalKind::Bronze],
            ..FilterOverrides::default()
        };

        let state = overrides.apply(base);

        assert!(!state.countries.contains("France"));
        assert!(state.countries.contains("Kenya"));
        assert_eq!(state.continents.len(), 2);
        assert!(state.medals.gold);
        assert!(!state.medals.bronze);
    }

    #[test]
    fn filter_file_with_partial_keys() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"sports": ["Judo"], "medals": {{"silver": false}}}}"#).unwrap();

        let state = load_filter_file(file.path()).unwrap();

        assert!(state.sports.contains("Judo"));
        assert!(state.countries.is_empty());
        assert!(state.medals.gold);
        assert!(!state.medals.silver);
    }

    #[test]
    fn malformed_filter_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let error = load_filter_file(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("parse filter file"));
    }
}
