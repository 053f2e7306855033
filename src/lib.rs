//! # reaper
//!
//! A small client for Reddit-style APIs. Three operations, all funneled
//! through one minimum-interval rate gate:
//!
//! - **reap**: GET a listing, returning a [`Harvest`] of comments, posts,
//!   messages and "more" markers
//! - **sow**: POST a form, reporting only transport failure
//! - **get_sow**: POST a form with `api_type=json`, returning the created
//!   [`Submission`]
//!
//! Transport and parsing are pluggable through the [`Transport`] and
//! [`ResponseParser`] traits.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reaper::{params, Reaper, ReaperConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ReaperConfig::builder()
//!         .user_agent("linux:my-bot:v0.1 (by /u/someone)")
//!         .build();
//!     let reaper = Reaper::from_config(&config)?;
//!
//!     let harvest = reaper.reap("/r/rust/new", &params([("limit", "5")])).await?;
//!     println!("{} posts", harvest.posts.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration
pub mod config;

/// Transport seam and rate gate
pub mod http;

/// Response parsers
pub mod parse;

/// The rate-gated request issuer
pub mod reaper;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ReaperConfig;
pub use error::{Error, Result};
pub use http::{RateGate, Request, ReqwestTransport, Response, Transport};
pub use parse::{JsonParser, ResponseParser};
pub use reaper::Reaper;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
