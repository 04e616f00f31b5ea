//! Filtering and aggregation core of the Olympics dashboard.
//!
//! Raw tables are normalized once at load ([`continent`]), filtered per page
//! against a [`FilterState`](olympics_model::FilterState) snapshot
//! ([`filters`]) and reduced to report structures ([`aggregate`], [`pages`]).

pub mod aggregate;
pub mod continent;
pub mod error;
pub mod filters;
pub mod frame;
pub mod options;
pub mod pages;
pub mod schema;
pub mod session;

pub use continent::{CONTINENT_COLUMN, OTHER_CONTINENT, continent_for, enrich_with_continent};
pub use error::{CoreError, Result};
pub use filters::{
    MedalColumn, MedalView, filter_athletes, filter_events, filter_medals, filter_nocs,
    filter_schedules, included_medal_columns,
};
pub use frame::{RowMask, filter_rows};
pub use options::filter_options;
pub use pages::PageLimits;
pub use schema::{CanonicalField, NameMatch, resolve_column, resolve_in};
pub use session::Session;
