//! CLI module
//!
//! Command-line interface over the reaper.
//!
//! # Commands
//!
//! - `reap` - GET a listing and print the harvest
//! - `sow` - POST a form
//! - `submit` - POST a form with `api_type=json` and print the created item

mod commands;
mod runner;

pub use commands::{parse_param, Cli, Commands, OutputFormat};
pub use runner::Runner;
