//! The reaper: rate-gated GET and POST against the remote API
//!
//! - `reap` issues a GET and returns the parsed [`Harvest`](crate::Harvest)
//! - `sow` issues a form POST and only reports transport failure
//! - `get_sow` issues a form POST with `api_type=json` and returns the
//!   parsed [`Submission`](crate::Submission)

mod client;
pub mod request;

pub use client::Reaper;
