//! Request builders
//!
//! Pure functions turning a path and a parameter map into URLs, bodies and
//! headers. Parameters are encoded in key order, so two maps with the same
//! entries always encode to the same string.

use crate::error::Result;
use crate::types::Params;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use std::collections::BTreeMap;
use url::{form_urlencoded, Url};

/// Content type used for every POST body
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// URL scheme for the TLS setting
pub fn scheme(tls: bool) -> &'static str {
    if tls {
        "https"
    } else {
        "http"
    }
}

/// Append `suffix` to `path` unless it is already there
pub fn with_suffix(path: &str, suffix: &str) -> String {
    if path.ends_with(suffix) {
        path.to_string()
    } else {
        format!("{path}{suffix}")
    }
}

/// Form-urlencode the parameters, sorted by key
pub fn encode_params(params: &Params) -> String {
    let sorted: BTreeMap<&str, &str> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(sorted)
        .finish()
}

/// `scheme://host/path?query` for a GET
pub fn reap_url(scheme: &str, host: &str, path: &str, params: &Params) -> Result<Url> {
    let mut url = post_url(scheme, host, path)?;
    let query = encode_params(params);
    if !query.is_empty() {
        url.set_query(Some(&query));
    }
    Ok(url)
}

/// `scheme://host/path` for a POST
pub fn post_url(scheme: &str, host: &str, path: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{scheme}://{host}"))?;
    url.set_path(path);
    Ok(url)
}

/// `Content-Type` and `Content-Length` for a form body
pub fn form_headers(body: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
    headers
}
