//! Tests for the parser module

use super::*;
use crate::error::Error;
use crate::http::Response;
use crate::types::Submission;
use pretty_assertions::assert_eq;
use serde_json::json;

fn response(body: serde_json::Value) -> Response {
    Response::new(200, body.to_string())
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn test_parse_listing_sorts_by_kind() {
    let body = json!({
        "kind": "Listing",
        "data": {
            "after": "t3_b",
            "children": [
                {"kind": "t3", "data": {"id": "a", "title": "first"}},
                {"kind": "t1", "data": {"id": "c", "body": "hello"}},
                {"kind": "t3", "data": {"id": "b", "title": "second"}},
                {"kind": "t4", "data": {"id": "m", "subject": "hi"}},
                {"kind": "more", "data": {"count": 12, "children": ["x", "y"]}}
            ]
        }
    });

    let harvest = JsonParser::new().parse(&response(body)).unwrap();

    assert_eq!(harvest.posts.len(), 2);
    assert_eq!(harvest.posts[0]["title"], "first");
    assert_eq!(harvest.posts[1]["id"], "b");
    assert_eq!(harvest.comments, vec![json!({"id": "c", "body": "hello"})]);
    assert_eq!(harvest.messages[0]["subject"], "hi");
    assert_eq!(harvest.mores[0]["count"], 12);
}

#[test]
fn test_parse_post_page_array() {
    // A post page is [listing with the post, listing with its comments].
    let body = json!([
        {
            "kind": "Listing",
            "data": {"children": [{"kind": "t3", "data": {"id": "p"}}]}
        },
        {
            "kind": "Listing",
            "data": {"children": [
                {"kind": "t1", "data": {"id": "c1", "replies": ""}},
                {"kind": "t1", "data": {"id": "c2", "replies": {
                    "kind": "Listing",
                    "data": {"children": [{"kind": "t1", "data": {"id": "nested"}}]}
                }}},
                {"kind": "more", "data": {"count": 3}}
            ]}
        }
    ]);

    let harvest = JsonParser::new().parse(&response(body)).unwrap();

    assert_eq!(harvest.posts.len(), 1);
    assert_eq!(harvest.comments.len(), 2);
    assert_eq!(harvest.mores.len(), 1);
    // Replies stay nested inside their parent.
    assert_eq!(
        harvest.comments[1]["replies"]["data"]["children"][0]["data"]["id"],
        "nested"
    );
}

#[test]
fn test_parse_single_thing() {
    let body = json!({"kind": "t3", "data": {"id": "solo"}});
    let harvest = JsonParser::new().parse(&response(body)).unwrap();
    assert_eq!(harvest.posts, vec![json!({"id": "solo"})]);
    assert_eq!(harvest.len(), 1);
}

#[test]
fn test_parse_skips_unknown_kinds() {
    let body = json!({
        "kind": "Listing",
        "data": {"children": [
            {"kind": "t5", "data": {"display_name": "rust"}},
            {"kind": "t2", "data": {"name": "someone"}}
        ]}
    });
    let harvest = JsonParser::new().parse(&response(body)).unwrap();
    assert!(harvest.is_empty());
}

#[test]
fn test_parse_empty_listing() {
    let body = json!({"kind": "Listing", "data": {"children": []}});
    let harvest = JsonParser::new().parse(&response(body)).unwrap();
    assert!(harvest.is_empty());
}

#[test]
fn test_parse_invalid_json() {
    let resp = Response::new(502, "<html>Bad Gateway</html>");
    let err = JsonParser::new().parse(&resp).unwrap_err();
    match err {
        Error::Decode { message } => assert!(message.contains("status 502")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

// ============================================================================
// Submission Tests
// ============================================================================

#[test]
fn test_parse_submitted() {
    let body = json!({
        "json": {
            "errors": [],
            "data": {
                "id": "1abcde",
                "name": "t3_1abcde",
                "url": "https://www.reddit.com/r/test/comments/1abcde/hello/",
                "drafts_count": 0
            }
        }
    });

    let submission = JsonParser::new().parse_submitted(&response(body)).unwrap();

    assert_eq!(
        submission,
        Submission {
            id: "1abcde".to_string(),
            name: "t3_1abcde".to_string(),
            url: "https://www.reddit.com/r/test/comments/1abcde/hello/".to_string(),
        }
    );
}

#[test]
fn test_parse_submitted_without_data() {
    let body = json!({"json": {"errors": []}});
    let submission = JsonParser::new().parse_submitted(&response(body)).unwrap();
    assert_eq!(submission, Submission::default());
}

#[test]
fn test_parse_submitted_api_errors() {
    let body = json!({
        "json": {
            "errors": [
                ["RATELIMIT", "you are doing that too much", "ratelimit"],
                ["NO_TEXT", "we need something here", "title"]
            ]
        }
    });

    let err = JsonParser::new()
        .parse_submitted(&response(body))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "API error: RATELIMIT: you are doing that too much: ratelimit; \
         NO_TEXT: we need something here: title"
    );
}

#[test]
fn test_parse_submitted_wrong_shape() {
    let body = json!({"success": true});
    let err = JsonParser::new()
        .parse_submitted(&response(body))
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
