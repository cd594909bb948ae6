//! Error types for reelscope
//!
//! Two tiers of failure exist in this crate: extraction strategies fail
//! silently (the next strategy is tried), while browser and navigation
//! failures are fatal for the current target and surface through these types.

use thiserror::Error;

/// The main error type for reelscope operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser-related errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Snapshot/extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Target URL does not look like a reel page
    #[error("Invalid reel URL: {0}")]
    InvalidUrl(String),

    /// Navigation timeout
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),

    /// Landed on a URL that is no longer the requested reel
    #[error("Redirected away from reel page: {0}")]
    Redirected(String),
}

/// Snapshot capture and extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Snapshot capture failed
    #[error("Snapshot capture failed: {0}")]
    SnapshotFailed(String),

    /// JavaScript evaluation failed
    #[error("JavaScript execution failed: {0}")]
    JsExecutionFailed(String),
}

/// Result type alias for reelscope operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Browser(BrowserError::LaunchFailed("no chrome".to_string()));
        assert!(err.to_string().contains("Failed to launch browser"));
        assert!(err.to_string().contains("no chrome"));
    }

    #[test]
    fn test_navigation_error() {
        let err =
            NavigationError::Redirected("https://www.example.com/accounts/login/".to_string());
        assert!(err.to_string().contains("Redirected away"));
    }

    #[test]
    fn test_extraction_error() {
        let err = ExtractionError::SnapshotFailed("page closed".to_string());
        assert!(err.to_string().contains("Snapshot capture failed"));
    }

    #[test]
    fn test_cdp_error() {
        let err = Error::cdp("websocket closed");
        assert_eq!(err.to_string(), "CDP error: websocket closed");
    }
}
