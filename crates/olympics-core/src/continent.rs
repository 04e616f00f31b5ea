//! Country-code to continent enrichment.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use olympics_common::column_text;

use crate::error::Result;
use crate::schema::{CanonicalField, resolve_column};

/// Continent assigned to codes the mapping does not know.
pub const OTHER_CONTINENT: &str = "Other";

/// Name of the column added by [`enrich_with_continent`].
pub const CONTINENT_COLUMN: &str = "continent";

/// Continent for a three-letter country code.
pub fn continent_for(code: &str) -> &'static str {
    match code {
        "USA" | "CAN" | "MEX" => "North America",
        "FRA" | "GBR" | "GER" | "ITA" | "ESP" | "NED" | "SWE" | "NOR" | "RUS" | "TUR" => "Europe",
        "AUS" | "NZL" => "Oceania",
        "CHN" | "JPN" | "KOR" | "IND" | "THA" | "PAK" | "KAZ" | "UZB" | "IRN" | "ISR" => "Asia",
        "BRA" | "ARG" | "CHL" | "COL" => "South America",
        "RSA" | "EGY" | "NGR" | "KEN" | "ETH" => "Africa",
        _ => OTHER_CONTINENT,
    }
}

/// Returns a copy of `df` with a `continent` column derived from its
/// country-code column.
///
/// Tables without a country-code column are returned unchanged. Null codes
/// map to [`OTHER_CONTINENT`].
pub fn enrich_with_continent(df: &DataFrame) -> Result<DataFrame> {
    let Some(code_column) = resolve_column(df, CanonicalField::CountryCode) else {
        debug!("no country code column; skipping continent enrichment");
        return Ok(df.clone());
    };

    let continents: Vec<&str> = column_text(df, &code_column)
        .iter()
        .map(|code| code.as_deref().map_or(OTHER_CONTINENT, continent_for))
        .collect();

    let mut enriched = df.clone();
    enriched.with_column(Series::new(CONTINENT_COLUMN.into(), continents))?;
    debug!(
        source = %code_column,
        rows = enriched.height(),
        "added continent column"
    );
    Ok(enriched)
}
