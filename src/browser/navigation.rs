//! Page navigation and reel-target validation
//!
//! Navigation runs with bounded retries and a post-load settle delay so the
//! client-rendered reel content has a chance to appear before a snapshot is
//! taken. [`ReelUrl`] owns the reel-path contract used both for input
//! validation and for detecting a redirect away from the target.

use crate::browser::PageHandle;
use crate::error::{Error, NavigationError, Result};
use regex::Regex;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Options for page navigation
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// Wait until condition (default: load event)
    pub wait_until: WaitUntil,
    /// Number of retry attempts (default: 3)
    pub retries: u32,
    /// Delay between retries in ms (default: 1000)
    pub retry_delay_ms: u64,
    /// Post-load settle delay in ms, with small jitter (default: 1500)
    pub settle_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            wait_until: WaitUntil::Load,
            retries: 3,
            retry_delay_ms: 1000,
            settle_ms: 1500,
        }
    }
}

/// Condition to wait for after navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitUntil {
    /// Wait until load event fires
    Load,
    /// Wait until DOMContentLoaded event fires
    DomContentLoaded,
}

/// Result of a navigation operation
#[derive(Debug)]
pub struct NavigationResult {
    /// Final URL after any redirects
    pub final_url: String,
    /// Page title
    pub title: Option<String>,
    /// Navigation duration in milliseconds
    pub duration_ms: u64,
}

/// Reel-target URL contract
///
/// A valid target looks like `https://www.<site>.<tld>/reel/<id>`; the same
/// path predicate is reused after navigation to catch login-wall or
/// home-page redirects.
pub struct ReelUrl;

impl ReelUrl {
    /// Validate a target URL before any browser session starts.
    pub fn validate(url: &str) -> std::result::Result<(), String> {
        if url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("URL must start with http:// or https://: {}", url));
        }

        if url.len() > 2048 {
            return Err("URL exceeds maximum length of 2048 characters".to_string());
        }

        let pattern =
            Regex::new(r"^https?://www\.[a-z0-9-]+(\.[a-z0-9-]+)+/reel/[A-Za-z0-9_-]+/?([?#].*)?$")
                .unwrap();
        if !pattern.is_match(url) {
            return Err(format!(
                "URL does not match the reel pattern https://www.<site>.<tld>/reel/<id>: {}",
                url
            ));
        }

        Ok(())
    }

    /// Whether a URL still points at a reel page (`/reel/<id>` in the path).
    pub fn is_reel_path(url: &str) -> bool {
        let path = match Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => return false,
        };
        let mut segments = path.trim_matches('/').split('/');
        matches!(
            (segments.next(), segments.next()),
            (Some("reel"), Some(id)) if !id.is_empty()
        )
    }

}

/// Page navigator with retry and settle behavior
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL, retrying on failure.
    #[instrument(skip(page))]
    pub async fn goto(
        page: &PageHandle,
        url: &str,
        options: Option<NavigationOptions>,
    ) -> Result<NavigationResult> {
        let opts = options.unwrap_or_default();
        let start = std::time::Instant::now();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(NavigationError::InvalidUrl(format!(
                "URL must start with http:// or https://: {}",
                url
            ))
            .into());
        }

        info!("Navigating to: {}", url);

        let mut last_error = None;
        for attempt in 0..=opts.retries {
            if attempt > 0 {
                warn!("Navigation retry attempt {} of {}", attempt, opts.retries);
                tokio::time::sleep(Duration::from_millis(opts.retry_delay_ms)).await;
            }

            match Self::navigate_once(&page.page, url, &opts).await {
                Ok(result) => {
                    page.set_url(result.final_url.clone()).await;

                    Self::settle(&opts).await;

                    let duration_ms = start.elapsed().as_millis() as u64;
                    return Ok(NavigationResult {
                        final_url: result.final_url,
                        title: result.title,
                        duration_ms,
                    });
                }
                Err(e) => {
                    warn!("Navigation attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            NavigationError::LoadFailed("Navigation failed after all retries".to_string()).into()
        }))
    }

    /// Perform a single navigation attempt
    async fn navigate_once(
        page: &chromiumoxide::Page,
        url: &str,
        opts: &NavigationOptions,
    ) -> Result<NavigationResult> {
        let timeout = Duration::from_millis(opts.timeout_ms);

        let nav_future = page.goto(url);
        let _response = tokio::time::timeout(timeout, nav_future)
            .await
            .map_err(|_| NavigationError::Timeout(opts.timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        Self::wait_for_ready(page, opts).await?;

        let final_url = page
            .url()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .unwrap_or_else(|| url.to_string());

        let title = page
            .evaluate("document.title")
            .await
            .ok()
            .and_then(|v| v.into_value::<String>().ok());

        debug!("Navigation complete: {} -> {}", url, final_url);

        Ok(NavigationResult {
            final_url,
            title,
            duration_ms: 0, // Will be set by caller
        })
    }

    /// Wait for page to be ready based on wait_until condition
    async fn wait_for_ready(page: &chromiumoxide::Page, opts: &NavigationOptions) -> Result<()> {
        let script = match opts.wait_until {
            WaitUntil::Load => {
                r#"
                    new Promise(resolve => {
                        if (document.readyState === 'complete') {
                            resolve(true);
                        } else {
                            window.addEventListener('load', () => resolve(true));
                        }
                    })
                "#
            }
            WaitUntil::DomContentLoaded => {
                r#"
                    new Promise(resolve => {
                        if (document.readyState !== 'loading') {
                            resolve(true);
                        } else {
                            document.addEventListener('DOMContentLoaded', () => resolve(true));
                        }
                    })
                "#
            }
        };

        let timeout = Duration::from_millis(opts.timeout_ms);
        tokio::time::timeout(timeout, page.evaluate(script))
            .await
            .map_err(|_| NavigationError::Timeout(opts.timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }

    /// Post-load settle delay: client-rendered counts and captions appear a
    /// beat after the load event. Jittered so repeated runs don't look
    /// perfectly periodic.
    async fn settle(opts: &NavigationOptions) {
        if opts.settle_ms == 0 {
            return;
        }
        let jitter = rand::random::<u64>() % 250;
        tokio::time::sleep(Duration::from_millis(opts.settle_ms + jitter)).await;
    }
}
