//! Runs one dashboard page against a session and formats the result.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use olympics_core::{PageLimits, Session};

use crate::summary::{
    render_athletes, render_global, render_options, render_overview, render_sports,
};

/// A page of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Overview,
    Global,
    Athletes,
    Sports { schedule_sport: Option<String> },
    Options,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Global => "global",
            Page::Athletes => "athletes",
            Page::Sports { .. } => "sports",
            Page::Options => "options",
        }
    }
}

/// How a page report is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn tables; `styled` enables colors and bold text.
    Table { styled: bool },
    /// Pretty-printed JSON of the report structure.
    Json,
}

/// Builds `page` from the session's current filter state.
pub fn render_page(
    session: &Session,
    page: &Page,
    limits: PageLimits,
    format: OutputFormat,
) -> Result<String> {
    info!(page = page.name(), "rendering page");
    match page {
        Page::Overview => {
            let report = session.overview(limits).context("build overview page")?;
            emit(&report, format, render_overview)
        }
        Page::Global => {
            let report = session.global(limits).context("build global page")?;
            emit(&report, format, render_global)
        }
        Page::Athletes => {
            let report = session.athletes(limits).context("build athletes page")?;
            emit(&report, format, render_athletes)
        }
        Page::Sports { schedule_sport } => {
            let report = session
                .sports(limits, schedule_sport.as_deref())
                .context("build sports page")?;
            emit(&report, format, render_sports)
        }
        Page::Options => emit(session.options(), format, render_options),
    }
}

fn emit<T, F>(report: &T, format: OutputFormat, render: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&T, bool) -> String,
{
    match format {
        OutputFormat::Table { styled } => Ok(render(report, styled)),
        OutputFormat::Json => serde_json::to_string_pretty(report).context("serialize report"),
    }
}
