//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rate-gated client for Reddit-style APIs
#[derive(Parser, Debug)]
#[command(name = "reaper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Target hostname (overrides the config file)
    #[arg(long, global = true)]
    pub hostname: Option<String>,

    /// Suffix appended to GET paths (overrides the config file)
    #[arg(long, global = true)]
    pub suffix: Option<String>,

    /// Use plain http instead of https
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Minimum interval between requests in milliseconds
    #[arg(long, global = true)]
    pub rate_ms: Option<u64>,

    /// User agent for outgoing requests
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// GET a listing and print what was harvested
    Reap {
        /// Path, e.g. /r/rust/new
        path: String,

        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// POST a form, discarding the response
    Sow {
        /// Path, e.g. /api/vote
        path: String,

        /// Form field as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// POST a form with api_type=json and print the created item
    Submit {
        /// Path, e.g. /api/submit
        path: String,

        /// Form field as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse a `key=value` argument
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty key in '{raw}'")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got '{raw}'")),
    }
}
