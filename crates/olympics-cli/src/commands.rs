use anyhow::{Context, Result};
use tracing::info_span;

use olympics_cli::config::{FilterOverrides, load_filter_file};
use olympics_cli::page::{OutputFormat, Page, render_page};
use olympics_core::{PageLimits, Session};
use olympics_model::{FilterState, MedalKind};

use crate::cli::{Cli, Command, FilterArgs};

/// Loads the session, applies the requested filters and renders one page.
pub fn run_page(cli: &Cli, format: OutputFormat) -> Result<String> {
    let span = info_span!("page", data_dir = %cli.data_dir.display());
    let _guard = span.enter();

    let mut session = Session::load(&cli.data_dir)
        .with_context(|| format!("load datasets from {}", cli.data_dir.display()))?;
    let filters = resolve_filters(&cli.filters, session.snapshot())?;
    session.set_filters(filters);

    render_page(&session, &page_for(&cli.command), limits(cli.top), format)
}

fn page_for(command: &Command) -> Page {
    match command {
        Command::Overview => Page::Overview,
        Command::Global => Page::Global,
        Command::Athletes => Page::Athletes,
        Command::Sports(args) => Page::Sports {
            schedule_sport: args.schedule_sport.clone(),
        },
        Command::Options => Page::Options,
    }
}

/// Filter file (or the session's first-load state) with flags on top.
fn resolve_filters(args: &FilterArgs, initial: FilterState) -> Result<FilterState> {
    let base = match &args.filter_file {
        Some(path) => load_filter_file(path)?,
        None => initial,
    };
    let excluded_medals = [
        (MedalKind::Gold, args.no_gold),
        (MedalKind::Silver, args.no_silver),
        (MedalKind::Bronze, args.no_bronze),
    ]
    .into_iter()
    .filter_map(|(kind, excluded)| excluded.then_some(kind))
    .collect();
    let overrides = FilterOverrides {
        countries: args.countries.clone(),
        sports: args.sports.clone(),
        continents: args.continents.clone(),
        excluded_medals,
    };
    Ok(overrides.apply(base))
}

fn limits(top: Option<usize>) -> PageLimits {
    match top {
        Some(n) => PageLimits {
            top_countries: n,
            top_sports: n,
        },
        None => PageLimits::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medal_flags_switch_off_kinds() {
        let args = FilterArgs {
            no_silver: true,
            ..FilterArgs::default()
        };
        let state = resolve_filters(&args, FilterState::default()).unwrap();
        assert!(state.medals.gold);
        assert!(!state.medals.silver);
        assert!(state.medals.bronze);
    }

    #[test]
    fn session_state_is_kept_without_flags() {
        let initial = FilterState::default().with_continents(["Europe", "Asia"]);
        let state = resolve_filters(&FilterArgs::default(), initial.clone()).unwrap();
        assert_eq!(state, initial);
    }

    #[test]
    fn top_overrides_both_limits() {
        assert_eq!(limits(None), PageLimits::default());
        let limits = limits(Some(3));
        assert_eq!(limits.top_countries, 3);
        assert_eq!(limits.top_sports, 3);
    }
}
