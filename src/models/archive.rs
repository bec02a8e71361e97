//! Archive request DTOs.
//!
//! - `ArchiveFormat`: format identifier taken from the requested file extension
//! - `ArchiveParams`: everything the archive generator needs from a request
//! - `ArchiveManifest`: what the backend resolved the request to

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::failure::ValidationError;

const SUPPORTED_FORMATS: [&str; 4] = ["tar", "zip", "tar.gz", "tgz"];

/// Archive format identifier, stored without the leading dot.
///
/// Empty when the request named no extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArchiveFormat(String);

impl ArchiveFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::new(
                "Archive format is missing, use an extension like .zip or .tar",
            ));
        }
        if !SUPPORTED_FORMATS.contains(&self.as_str()) {
            return Err(ValidationError::new(format!(
                "Archive format '{}' is not supported, expected one of: {}",
                self.0,
                SUPPORTED_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveParams {
    pub format: ArchiveFormat,
    /// Prepended to every path inside the archive
    pub prefix: Option<String>,
    pub attributes: Option<String>,
    /// Fixed modification time for all entries
    pub time: Option<DateTime<Utc>>,
    pub compression: Option<i64>,
    /// Git reference, tag or commit to archive
    pub treeish: String,
    /// Restricts the archive to these paths, in request order
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveManifest {
    pub repository: String,
    /// Commit OID the treeish resolved to
    pub commit: String,
    pub filename: String,
    pub params: ArchiveParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_formats_validate() {
        for format in ["tar", "zip", "tgz", "tar.gz"] {
            assert!(ArchiveFormat::new(format).validate().is_ok(), "{}", format);
        }
    }

    #[test]
    fn unsupported_format_names_the_format() {
        let err = ArchiveFormat::new("rar").validate().unwrap_err();
        assert!(err.message.contains("'rar'"));
    }

    #[test]
    fn empty_format_is_rejected() {
        assert!(ArchiveFormat::default().validate().is_err());
    }

    #[test]
    fn format_serializes_as_plain_string() {
        let json = serde_json::to_value(ArchiveFormat::new("zip")).unwrap();
        assert_eq!(json, serde_json::json!("zip"));
    }
}
