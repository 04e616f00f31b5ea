//! Library half of the `olympics` command: logging setup, filter assembly
//! and page rendering. The binary only parses arguments.

pub mod config;
pub mod logging;
pub mod page;
pub mod summary;
