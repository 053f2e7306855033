//! JSON listing parser
//!
//! Handles the three shapes a GET endpoint returns: a `Listing`, an array of
//! listings (a post page is `[post, comments]`), or a single thing. Children
//! are routed by `kind`; their `data` objects are passed through untouched.

use super::types::ResponseParser;
use crate::error::{Error, Result};
use crate::http::Response;
use crate::types::{Harvest, JsonValue, Submission};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const KIND_LISTING: &str = "Listing";
const KIND_COMMENT: &str = "t1";
const KIND_POST: &str = "t3";
const KIND_MESSAGE: &str = "t4";
const KIND_MORE: &str = "more";

/// Default parser for JSON responses
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Create a new JSON parser
    pub fn new() -> Self {
        Self
    }

    fn decode(response: &Response) -> Result<Value> {
        serde_json::from_slice(&response.body).map_err(|e| {
            Error::decode(format!(
                "Failed to parse JSON (status {}): {e}",
                response.status
            ))
        })
    }

    fn collect(value: Value, harvest: &mut Harvest) {
        match value {
            Value::Array(items) => {
                for item in items {
                    Self::collect(item, harvest);
                }
            }
            Value::Object(mut thing) => {
                let kind = thing
                    .get("kind")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let data = thing.remove("data").unwrap_or(Value::Null);

                match kind.as_str() {
                    KIND_LISTING => {
                        if let Value::Object(mut listing) = data {
                            if let Some(children) = listing.remove("children") {
                                Self::collect(children, harvest);
                            }
                        }
                    }
                    KIND_COMMENT => harvest.comments.push(data),
                    KIND_POST => harvest.posts.push(data),
                    KIND_MESSAGE => harvest.messages.push(data),
                    KIND_MORE => harvest.mores.push(data),
                    other => debug!("Skipping thing of kind '{}'", other),
                }
            }
            _ => {}
        }
    }
}

/// `{"json": {"errors": [...], "data": {...}}}`
#[derive(Debug, Deserialize)]
struct SubmitEnvelope {
    json: SubmitBody,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubmitBody {
    errors: Vec<JsonValue>,
    data: Option<Submission>,
}

impl ResponseParser for JsonParser {
    fn parse(&self, response: &Response) -> Result<Harvest> {
        let value = Self::decode(response)?;
        let mut harvest = Harvest::default();
        Self::collect(value, &mut harvest);
        Ok(harvest)
    }

    fn parse_submitted(&self, response: &Response) -> Result<Submission> {
        let value = Self::decode(response)?;
        let envelope: SubmitEnvelope = serde_json::from_value(value)
            .map_err(|e| Error::decode(format!("Unexpected submission response: {e}")))?;

        if !envelope.json.errors.is_empty() {
            // Each error is `[code, message, field]`.
            let messages: Vec<String> = envelope
                .json
                .errors
                .iter()
                .map(|err| match err {
                    Value::Array(parts) => parts
                        .iter()
                        .filter_map(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                        .join(": "),
                    other => other.to_string(),
                })
                .collect();
            return Err(Error::api(messages.join("; ")));
        }

        Ok(envelope.json.data.unwrap_or_default())
    }
}
