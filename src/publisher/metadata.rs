//! Dataset metadata as submitted by the upload service.

use crate::error::{Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Caller-supplied description of an uploaded dataset. Untrusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Owning organization. Opaque.
    #[serde(rename = "orgUUID")]
    pub org_uuid: String,
    pub title: String,
    /// Leading lines of the uploaded file. Only the first (header) line is read.
    pub data_sample: String,
    /// Absolute URI of the uploaded file, e.g. `hdfs://host/dir/.../000000_1`.
    pub target_uri: String,
    #[serde(default)]
    pub is_public: bool,
}

impl Metadata {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse dataset metadata JSON")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read metadata file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Header fields of the data sample, untrimmed.
    ///
    /// Trailing empty fields (`a,b,,`) are dropped. An empty sample yields a
    /// single empty field.
    pub fn header_fields(&self) -> Vec<&str> {
        let header = self.data_sample.lines().next().unwrap_or_default();
        let mut fields: Vec<&str> = header.split(',').collect();
        while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        fields
    }
}
