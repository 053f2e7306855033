//! Response parser module
//!
//! # Overview
//!
//! The reaper delegates response bodies to a [`ResponseParser`]. The default
//! [`JsonParser`] sorts listing children into comments, posts, messages and
//! "more" markers, and reads the created item out of a submit response.

mod listing;
mod types;

pub use listing::JsonParser;
pub use types::ResponseParser;

#[cfg(test)]
mod tests;
