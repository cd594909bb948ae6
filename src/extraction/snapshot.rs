//! Page snapshot and DOM index
//!
//! A [`PageSnapshot`] is an immutable capture of a rendered page: the full
//! text content, the outer HTML, and the final resolved URL. It is produced
//! asynchronously from a live CDP page but consumed by purely synchronous
//! extraction code, so every heuristic can be exercised against synthetic
//! fixtures without a browser.

use crate::browser::PageHandle;
use crate::error::{ExtractionError, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Selectors considered dedicated caption containers, highest confidence
/// first. Generic headings are handled separately as a lower-priority
/// strategy.
const CAPTION_SELECTORS: &[&str] = &[
    r#"[data-testid="caption"]"#,
    "div.caption",
    "article h1",
];

/// Immutable capture of a rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// URL the browser actually landed on, after any redirects
    pub final_url: String,
    /// Full visible text content (`document.body.innerText`)
    pub text: String,
    /// Outer HTML of the document
    pub html: String,
}

impl PageSnapshot {
    /// Capture a snapshot from a live page.
    #[instrument(skip(page))]
    pub async fn capture(page: &PageHandle) -> Result<Self> {
        let final_url = page
            .inner()
            .url()
            .await
            .map_err(|e| ExtractionError::SnapshotFailed(e.to_string()))?
            .unwrap_or_default();

        let text: String = page
            .inner()
            .evaluate("document.body.innerText")
            .await
            .map_err(|e| ExtractionError::JsExecutionFailed(e.to_string()))?
            .into_value()
            .map_err(|e| ExtractionError::JsExecutionFailed(e.to_string()))?;

        let html = page
            .inner()
            .content()
            .await
            .map_err(|e| ExtractionError::SnapshotFailed(e.to_string()))?;

        debug!(
            "Captured snapshot: {} chars text, {} chars html, final_url={}",
            text.chars().count(),
            html.chars().count(),
            final_url
        );

        Ok(Self {
            final_url,
            text,
            html,
        })
    }
}

/// A hyperlink harvested from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// The href attribute, verbatim (may be relative)
    pub href: String,
    /// Trimmed link text
    pub text: String,
    /// Whether the link sits inside a header-like region
    pub in_header: bool,
}

/// Selector-level view over a snapshot's HTML, built once per extraction.
///
/// Strategies read from this index instead of querying the DOM themselves,
/// which keeps them pure functions of plain data.
#[derive(Debug, Clone, Default)]
pub struct DomIndex {
    /// All hyperlinks, in document order
    pub links: Vec<PageLink>,
    /// Text of generic heading elements (h1-h3)
    pub headings: Vec<String>,
    /// Values of `aria-label` attributes, in document order
    pub aria_labels: Vec<String>,
    /// Text blocks from dedicated caption containers
    pub captions: Vec<String>,
}

impl DomIndex {
    /// Build the index from raw HTML.
    pub fn build(html: &str) -> Self {
        let doc = Html::parse_document(html);

        let link_sel = Selector::parse("a[href]").unwrap();
        let links = doc
            .select(&link_sel)
            .filter_map(|el| {
                let href = el.value().attr("href")?.to_string();
                let text = collect_text(&el);
                Some(PageLink {
                    href,
                    text,
                    in_header: in_header_region(&el),
                })
            })
            .collect();

        let heading_sel = Selector::parse("h1, h2, h3").unwrap();
        let headings = doc
            .select(&heading_sel)
            .map(|el| collect_text(&el))
            .filter(|t| !t.is_empty())
            .collect();

        let aria_sel = Selector::parse("[aria-label]").unwrap();
        let aria_labels = doc
            .select(&aria_sel)
            .filter_map(|el| el.value().attr("aria-label"))
            .map(str::to_string)
            .filter(|t| !t.is_empty())
            .collect();

        let mut captions = Vec::new();
        for raw in CAPTION_SELECTORS {
            let sel = Selector::parse(raw).unwrap();
            for el in doc.select(&sel) {
                let text = collect_text(&el);
                if !text.is_empty() {
                    captions.push(text);
                }
            }
        }

        Self {
            links,
            headings,
            aria_labels,
            captions,
        }
    }
}

fn collect_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn in_header_region(el: &ElementRef) -> bool {
    el.ancestors().any(|node| {
        node.value().as_element().is_some_and(|e| {
            e.name() == "header" || e.attr("role") == Some("banner")
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_collects_links() {
        let dom = DomIndex::build(
            r#"<html><body>
                <a href="/chef_anna/">chef_anna</a>
                <a href="https://www.example.com/reel/ABC/">Watch</a>
            </body></html>"#,
        );
        assert_eq!(dom.links.len(), 2);
        assert_eq!(dom.links[0].href, "/chef_anna/");
        assert_eq!(dom.links[0].text, "chef_anna");
        assert!(!dom.links[0].in_header);
    }

    #[test]
    fn test_header_region_detection() {
        let dom = DomIndex::build(
            r#"<html><body>
                <header><a href="/chef_anna/">chef_anna</a></header>
                <div role="banner"><a href="/other/">other</a></div>
                <a href="/plain/">plain</a>
            </body></html>"#,
        );
        assert!(dom.links[0].in_header);
        assert!(dom.links[1].in_header);
        assert!(!dom.links[2].in_header);
    }

    #[test]
    fn test_build_collects_headings_and_labels() {
        let dom = DomIndex::build(
            r#"<html><body>
                <h1>Nice day #outside</h1>
                <h2></h2>
                <button aria-label="Like: 1.2K likes"></button>
            </body></html>"#,
        );
        assert_eq!(dom.headings, vec!["Nice day #outside".to_string()]);
        assert_eq!(dom.aria_labels, vec!["Like: 1.2K likes".to_string()]);
    }

    #[test]
    fn test_caption_containers() {
        let dom = DomIndex::build(
            r#"<html><body>
                <div class="caption">Hello world
rest of caption</div>
            </body></html>"#,
        );
        assert_eq!(dom.captions.len(), 1);
        assert!(dom.captions[0].starts_with("Hello world"));
    }
}
