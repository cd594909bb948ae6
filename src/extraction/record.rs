//! Extraction output record
//!
//! One [`ReelRecord`] is produced per processed target, whatever happens:
//! full success, partial success, or a fatal abort with `error` set.

use serde::{Deserialize, Serialize};

/// Structured metadata extracted from a single reel page.
///
/// Every field except `url` is resolved independently; absence means
/// "not found", never zero or empty. Numeric counts are plain integers
/// after suffix normalization (`1.2K` -> `1200`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelRecord {
    /// The requested target URL, echoed verbatim
    pub url: String,
    /// Account handle of the poster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Audio attribution text, or the "not detected" sentinel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_used: Option<String>,
    /// Like count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    /// View/play count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Comment count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    /// First line of the caption, when it fits in 100 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Full caption text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present only when the extraction as a whole aborted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReelRecord {
    /// Create an empty record for the given target.
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Create a record carrying a fatal error for the given target.
    pub fn failed<S: Into<String>, E: Into<String>>(url: S, error: E) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Whether the extraction aborted fatally.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
