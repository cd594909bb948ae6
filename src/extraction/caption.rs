//! Caption and title resolution
//!
//! The caption is the free-text description of the reel; the title is its
//! trimmed first line when that line fits in 100 characters. Three
//! strategies run in priority order: dedicated caption containers, generic
//! headings, then a line-by-line scan of the page text.

use crate::extraction::snapshot::DomIndex;

/// Terms whose presence disqualifies a caption candidate (matched
/// case-insensitively, except the bullet separator).
const EXCLUDED_TERMS: &[&str] = &["likes", "views", "comments", "follow", "log in", "sign up"];

/// Emoji commonly opening or decorating captions; one of these (or a
/// topical keyword) must appear for the line-scan strategy to accept a line.
const EMOJI_MARKERS: &[char] = &[
    '\u{1F3A5}', // 🎥
    '\u{1F602}', // 😂
    '\u{2764}',  // ❤
    '\u{1F525}', // 🔥
    '\u{2728}',  // ✨
    '\u{1F60D}', // 😍
    '\u{1F64C}', // 🙌
    '\u{1F440}', // 👀
    '\u{1F3B6}', // 🎶
    '\u{1F4AF}', // 💯
];

/// Topical keywords accepted as caption markers in the line-scan strategy.
const TOPIC_MARKERS: &[&str] = &["#", "@", "link in bio", "tutorial", "recipe"];

const MIN_HEADING_LEN: usize = 10;
const MIN_SCAN_LINE_LEN: usize = 10;
const MAX_SCAN_LINE_LEN: usize = 200;
const MAX_TITLE_LEN: usize = 100;
const MIN_CONTAINER_TITLE_LEN: usize = 3;

/// A resolved caption: the full description plus the derived title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// Full caption text, unbounded
    pub description: String,
    /// Trimmed first line, when within the title length bound
    pub title: Option<String>,
}

/// Resolve the caption from the DOM index and page text.
///
/// `username` is the already-resolved handle, used to reject candidates
/// that merely repeat it.
pub fn resolve(text: &str, dom: &DomIndex, username: Option<&str>) -> Option<Caption> {
    container_caption(dom)
        .or_else(|| heading_caption(dom, username))
        .or_else(|| line_scan_caption(text, username))
}

/// Strategy (a): a dedicated caption container's text.
fn container_caption(dom: &DomIndex) -> Option<Caption> {
    let description = dom.captions.iter().find(|c| !c.is_empty())?.clone();
    let title = derive_title(&description).filter(|t| t.chars().count() > MIN_CONTAINER_TITLE_LEN);
    Some(Caption { description, title })
}

/// Strategy (b): a generic heading that is long enough and not UI chrome.
fn heading_caption(dom: &DomIndex, username: Option<&str>) -> Option<Caption> {
    dom.headings
        .iter()
        .map(|h| h.trim())
        .find(|h| {
            h.chars().count() > MIN_HEADING_LEN
                && passes_exclusions(h)
                && Some(*h) != username
        })
        .map(|h| Caption {
            description: h.to_string(),
            title: derive_title(h),
        })
}

/// Strategy (c): scan page-text lines for one that looks like a caption.
fn line_scan_caption(text: &str, username: Option<&str>) -> Option<Caption> {
    text.lines()
        .map(str::trim)
        .find(|line| {
            let len = line.chars().count();
            len >= MIN_SCAN_LINE_LEN
                && len <= MAX_SCAN_LINE_LEN
                && has_caption_marker(line)
                && passes_exclusions(line)
                && Some(*line) != username
        })
        .map(|line| Caption {
            description: line.to_string(),
            title: derive_title(line),
        })
}

/// Title = trimmed first line of the description, when it fits the bound.
fn derive_title(description: &str) -> Option<String> {
    let first = description.lines().next()?.trim();
    if first.is_empty() || first.chars().count() > MAX_TITLE_LEN {
        return None;
    }
    Some(first.to_string())
}

fn passes_exclusions(candidate: &str) -> bool {
    if candidate.contains('•') {
        return false;
    }
    let lower = candidate.to_lowercase();
    !EXCLUDED_TERMS.iter().any(|term| lower.contains(term))
}

fn has_caption_marker(line: &str) -> bool {
    line.chars().any(|c| EMOJI_MARKERS.contains(&c))
        || TOPIC_MARKERS
            .iter()
            .any(|kw| line.to_lowercase().contains(kw))
}
