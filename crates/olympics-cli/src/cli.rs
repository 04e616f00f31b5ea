//! CLI argument definitions for the Olympics dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "olympics",
    version,
    about = "Paris 2024 Olympics dashboard - medal, athlete and event summaries",
    long_about = "Summarize the Paris 2024 Olympic datasets.\n\n\
                  Reads the CSV tables from a data directory, applies the shared\n\
                  country/sport/continent/medal filters and prints one page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Directory holding the dataset CSV files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Output format for page reports.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

    /// Rows shown in top-N lists (countries and sports).
    #[arg(long = "top", value_name = "N", global = true)]
    pub top: Option<usize>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// KPIs, medal distribution and top countries.
    Overview,

    /// Medals by continent, top countries and the continent hierarchy.
    Global,

    /// Athlete counts, gender split and age distribution.
    Athletes,

    /// Sport and event counts, medals by discipline and a schedule.
    Sports(SportsArgs),

    /// List the values each filter accepts.
    Options,
}

/// Shared filter selection. Repeat a flag to select several values.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Restrict to a country (name as it appears in the data).
    #[arg(long = "country", value_name = "NAME", global = true)]
    pub countries: Vec<String>,

    /// Restrict to a sport.
    #[arg(long = "sport", value_name = "NAME", global = true)]
    pub sports: Vec<String>,

    /// Restrict to a continent.
    #[arg(long = "continent", value_name = "NAME", global = true)]
    pub continents: Vec<String>,

    /// Exclude gold medals.
    #[arg(long = "no-gold", global = true)]
    pub no_gold: bool,

    /// Exclude silver medals.
    #[arg(long = "no-silver", global = true)]
    pub no_silver: bool,

    /// Exclude bronze medals.
    #[arg(long = "no-bronze", global = true)]
    pub no_bronze: bool,

    /// Start from a JSON filter state instead of the session default.
    ///
    /// Keys: countries, sports, continents (string lists) and medals
    /// ({"gold": bool, "silver": bool, "bronze": bool}). Flags given on the
    /// command line are applied on top.
    #[arg(long = "filters", value_name = "FILE", global = true)]
    pub filter_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct SportsArgs {
    /// Sport whose schedule is listed (default: first sport alphabetically).
    #[arg(long = "schedule-sport", value_name = "SPORT")]
    pub schedule_sport: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
