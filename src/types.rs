//! Common types used throughout reaper
//!
//! Request parameters and the result records handed back by `reap` and
//! `get_sow`. The listing items themselves stay opaque JSON: the parser
//! decides what goes in them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Request parameters, encoded as a query string or a form body
pub type Params = HashMap<String, String>;

/// A comment (`t1`) as returned by the parser
pub type Comment = JsonValue;

/// A post (`t3`) as returned by the parser
pub type Post = JsonValue;

/// A private message (`t4`) as returned by the parser
pub type Message = JsonValue;

/// A "more" marker standing in for elided children
pub type More = JsonValue;

// ============================================================================
// Harvest
// ============================================================================

/// Everything extracted from one `reap` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
    /// Comments in the response
    pub comments: Vec<Comment>,
    /// Posts in the response
    pub posts: Vec<Post>,
    /// Messages in the response
    pub messages: Vec<Message>,
    /// Markers for children the server did not send
    pub mores: Vec<More>,
}

impl Harvest {
    /// True when the response contained nothing
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
            && self.posts.is_empty()
            && self.messages.is_empty()
            && self.mores.is_empty()
    }

    /// Total number of items across all collections
    pub fn len(&self) -> usize {
        self.comments.len() + self.posts.len() + self.messages.len() + self.mores.len()
    }
}

// ============================================================================
// Submission
// ============================================================================

/// The item created by a `get_sow` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    /// Base-36 id of the new item
    pub id: String,
    /// Fullname (`t3_...` or `t1_...`)
    pub name: String,
    /// Permalink, when the server sends one
    pub url: String,
}

/// Build [`Params`] from key/value pairs
pub fn params<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Params
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_harvest_default_is_empty() {
        let harvest = Harvest::default();
        assert!(harvest.is_empty());
        assert_eq!(harvest.len(), 0);
    }

    #[test]
    fn test_harvest_len() {
        let harvest = Harvest {
            comments: vec![json!({"id": "c1"}), json!({"id": "c2"})],
            posts: vec![json!({"id": "p1"})],
            messages: vec![],
            mores: vec![json!({"count": 3})],
        };
        assert!(!harvest.is_empty());
        assert_eq!(harvest.len(), 4);
    }

    #[test]
    fn test_submission_deserialize_partial() {
        let submission: Submission = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(submission.id, "abc");
        assert!(submission.name.is_empty());
        assert!(submission.url.is_empty());
    }

    #[test]
    fn test_params_helper() {
        let p = params([("limit", "5"), ("sort", "new")]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.get("limit"), Some(&"5".to_string()));
    }
}
