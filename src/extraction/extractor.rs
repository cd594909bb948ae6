//! Extraction driver
//!
//! Resolves each [`ReelRecord`] field independently from a page snapshot,
//! in priority order, accepting the first strategy that yields a valid
//! value. A failed strategy is silently skipped; only a page-level failure
//! (redirect away from the reel, snapshot capture error) aborts the run,
//! and even then a record is still produced.

use crate::browser::{PageHandle, ReelUrl};
use crate::error::NavigationError;
use crate::extraction::record::ReelRecord;
use crate::extraction::snapshot::{DomIndex, PageSnapshot};
use crate::extraction::{audio, caption, counts, username};
use tracing::{debug, info, instrument, warn};

/// Multi-strategy metadata extractor for reel pages.
pub struct ReelExtractor;

impl ReelExtractor {
    /// Extract a record from an already-captured snapshot.
    ///
    /// Pure function of its inputs: retrying with a fresh snapshot of the
    /// same page yields the same record.
    pub fn extract(target_url: &str, snapshot: &PageSnapshot) -> ReelRecord {
        let mut record = ReelRecord::new(target_url);

        // Fatal tier: a login wall or home-page redirect means the reel
        // content never rendered, so no field strategy can be trusted.
        if !ReelUrl::is_reel_path(&snapshot.final_url) {
            let cause = NavigationError::Redirected(snapshot.final_url.clone());
            warn!("Aborting extraction: {}", cause);
            record.error = Some(cause.to_string());
            return record;
        }

        let dom = DomIndex::build(&snapshot.html);

        record.username = username::resolve(&dom);
        record.audio_used = Some(audio::resolve(&snapshot.text, &dom));
        record.likes = counts::resolve(counts::Metric::Likes, &snapshot.text, &dom);
        record.views = counts::resolve(counts::Metric::Views, &snapshot.text, &dom);
        record.comments = counts::resolve(counts::Metric::Comments, &snapshot.text, &dom);

        if let Some(cap) = caption::resolve(&snapshot.text, &dom, record.username.as_deref()) {
            record.title = cap.title;
            record.description = Some(cap.description);
        }

        debug!(
            "Resolved fields: username={:?}, likes={:?}, views={:?}, comments={:?}, title={:?}",
            record.username, record.likes, record.views, record.comments, record.title
        );

        record
    }

    /// Capture a snapshot from a live page and extract from it.
    ///
    /// A capture failure becomes an `error`-bearing record; this never
    /// returns silence.
    #[instrument(skip(page))]
    pub async fn extract_from_page(target_url: &str, page: &PageHandle) -> ReelRecord {
        info!("Extracting reel metadata for {}", target_url);
        match PageSnapshot::capture(page).await {
            Ok(snapshot) => Self::extract(target_url, &snapshot),
            Err(e) => {
                warn!("Snapshot capture failed: {}", e);
                ReelRecord::failed(target_url, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(final_url: &str, html: &str, text: &str) -> PageSnapshot {
        PageSnapshot {
            final_url: final_url.to_string(),
            html: html.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_redirect_is_fatal_and_skips_fields() {
        let snap = snapshot(
            "https://www.example.com/accounts/login/",
            "<html><body></body></html>",
            "42,000 likes",
        );
        let record = ReelExtractor::extract("https://www.example.com/reel/ABC123/", &snap);
        assert!(record.is_failed());
        let error = record.error.as_deref().unwrap();
        assert!(error.contains("Redirected away from reel page"));
        assert!(error.contains("/accounts/login/"));
        // Metrics were never attempted even though the text has a match
        assert!(record.likes.is_none());
        assert!(record.audio_used.is_none());
    }

    #[test]
    fn test_audio_sentinel_always_present_on_success() {
        let snap = snapshot(
            "https://www.example.com/reel/ABC123/",
            "<html><body></body></html>",
            "",
        );
        let record = ReelExtractor::extract("https://www.example.com/reel/ABC123/", &snap);
        assert!(!record.is_failed());
        assert_eq!(record.audio_used.as_deref(), Some("Audio not detected"));
    }

    #[test]
    fn test_url_is_echoed_verbatim() {
        let snap = snapshot(
            "https://www.example.com/reel/ABC123/?utm_source=share",
            "<html><body></body></html>",
            "",
        );
        let record = ReelExtractor::extract("https://www.example.com/reel/ABC123/", &snap);
        assert_eq!(record.url, "https://www.example.com/reel/ABC123/");
    }
}
