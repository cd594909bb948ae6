//! ReelScope - Headless-Browser Metadata Extraction for Reel Pages
//!
//! This crate extracts structured metadata (username, audio attribution,
//! like/view/comment counts, caption, title) from a single short-video
//! "reel" page. Such pages render client-side and block plain HTTP
//! scraping, so a headless browser fetches them; the interesting part is
//! the extraction layer, which copes with unstable markup through ordered
//! per-field fallback strategies.
//!
//! # Architecture
//!
//! ```text
//! CLI ──▶ Browser Controller (CDP) ──▶ PageSnapshot
//!                                          │
//!                                          ▼
//!                                    ReelExtractor
//!                               (per-field strategy chains)
//!                                          │
//!                                          ▼
//!                                  ReelRecord (JSON)
//! ```
//!
//! Every field resolves independently; a partial record is a valid result.
//! The extractor itself is a pure function of a captured snapshot, so all
//! heuristics are testable against synthetic fixtures without a browser.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reelscope::browser::BrowserController;
//! use reelscope::extraction::ReelExtractor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = "https://www.example.com/reel/ABC123/";
//!     let controller = BrowserController::new().await?;
//!
//!     let page = controller.navigate(url, None).await?;
//!     let record = ReelExtractor::extract_from_page(url, &page).await;
//!
//!     println!("{}", serde_json::to_string_pretty(&record)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod error;
pub mod extraction;

// Re-exports for convenience
pub use browser::{BrowserController, ReelUrl};
pub use error::{Error, Result};
pub use extraction::{PageSnapshot, ReelExtractor, ReelRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
