//! Parser trait
//!
//! The reaper never looks inside a response body. It hands the response to a
//! [`ResponseParser`] and returns whatever comes back.

use crate::error::Result;
use crate::http::Response;
use crate::types::{Harvest, Submission};

/// Turns raw responses into harvests and submissions
pub trait ResponseParser: Send + Sync {
    /// Extract comments, posts, messages and "more" markers from a GET response
    fn parse(&self, response: &Response) -> Result<Harvest>;

    /// Extract the created item from a POST response sent with `api_type=json`
    fn parse_submitted(&self, response: &Response) -> Result<Submission>;
}
