//! Archive request decomposition.
//!
//! A single wildcard segment carries both the git reference and the requested
//! filename, e.g. `refs/heads/main.zip`:
//! - the last path component is the filename (`main.zip`)
//! - its extension is the format (`zip`)
//! - the directory part joined with the bare name is the treeish
//!   (`refs/heads/main`)
//!
//! The split is positional. A reference that itself contains a dot, such as
//! the tag `v1.0` requested without an extension, comes out as treeish `v1`
//! with format `0`; telling these apart would need the list of valid refs.
//!
//! Optional query parameters are advisory. Absent, empty and malformed values
//! all become `None` rather than rejecting the request.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::{ArchiveFormat, ArchiveParams};

pub const PATH_PARAM_ARCHIVE_REFS: &str = "refs";
pub const QUERY_PARAM_ARCHIVE_PATHS: &str = "path";
pub const QUERY_PARAM_ARCHIVE_PREFIX: &str = "prefix";
pub const QUERY_PARAM_ARCHIVE_ATTRIBUTES: &str = "attributes";
pub const QUERY_PARAM_ARCHIVE_TIME: &str = "time";
pub const QUERY_PARAM_ARCHIVE_COMPRESSION: &str = "compression";

/// Layout of the `time` parameter, interpreted as UTC.
pub const ARCHIVE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Archive parameters extracted from the request, plus the bare filename used
/// for the `Content-Disposition` header.
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    pub params: ArchiveParams,
    pub filename: String,
}

impl<S> FromRequestParts<S> for ArchiveRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let refs = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(mut captures)| captures.remove(PATH_PARAM_ARCHIVE_REFS))
            .unwrap_or_default();

        let (params, filename) = parse_archive_params(&refs, parts.uri.query());
        Ok(Self { params, filename })
    }
}

pub fn parse_archive_params(refs: &str, query: Option<&str>) -> (ArchiveParams, String) {
    let (dir, filename) = split_last_component(refs);
    let (name, extension) = split_extension(filename);
    let format = extension.strip_prefix('.').unwrap_or(extension);

    let query = QueryParams::parse(query.unwrap_or_default());

    let time = query
        .non_empty(QUERY_PARAM_ARCHIVE_TIME)
        .filter(|value| has_time_layout(value))
        .and_then(|value| NaiveDateTime::parse_from_str(value, ARCHIVE_TIME_LAYOUT).ok())
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));

    let compression = query
        .non_empty(QUERY_PARAM_ARCHIVE_COMPRESSION)
        .and_then(|value| value.parse::<i64>().ok());

    let params = ArchiveParams {
        format: ArchiveFormat::new(format),
        prefix: query.non_empty(QUERY_PARAM_ARCHIVE_PREFIX).map(str::to_string),
        attributes: query
            .non_empty(QUERY_PARAM_ARCHIVE_ATTRIBUTES)
            .map(str::to_string),
        time,
        compression,
        treeish: format!("{}{}", dir, name),
        paths: query.all(QUERY_PARAM_ARCHIVE_PATHS),
    };

    (params, filename.to_string())
}

/// `YYYY-MM-DD HH:MM:SS` with every field zero-padded; chrono alone would also
/// accept `2023-1-5 10:00:00`.
fn has_time_layout(value: &str) -> bool {
    const SHAPE: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

    value.len() == SHAPE.len()
        && value.bytes().zip(SHAPE.iter()).all(|(b, &expected)| match expected {
            b'd' => b.is_ascii_digit(),
            _ => b == expected,
        })
}

/// Splits after the last `/`; the directory part keeps its trailing separator.
fn split_last_component(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    }
}

/// Splits before the last `.`; the extension keeps its dot.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) => filename.split_at(idx),
        None => (filename, ""),
    }
}

/// Decoded query pairs in the order the client sent them.
struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn parse(query: &str) -> Self {
        Self(url::form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`; an empty value counts as absent.
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.first(key).filter(|value| !value.is_empty())
    }

    fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}
