//! Username resolution
//!
//! The poster's handle is inferred from profile hyperlinks first, then from
//! header-region link text, then from any link text at all. Reserved path
//! segments (login pages, the reel path itself) and UI chrome strings are
//! never accepted as handles.

use crate::extraction::snapshot::DomIndex;
use url::Url;

/// Path segments that can never be a user handle.
pub const RESERVED_SEGMENTS: &[&str] = &[
    "accounts",
    "login",
    "explore",
    "reel",
    "reels",
    "p",
    "stories",
    "direct",
    "about",
    "legal",
    "developer",
    "directory",
    "web",
];

/// UI chrome fragments that disqualify a candidate handle.
pub const CHROME_TOKENS: &[&str] = &["Follow", "Sign", "Log", "•"];

const MAX_HANDLE_LEN: usize = 30;

/// Resolve the poster's username from the DOM index.
pub fn resolve(dom: &DomIndex) -> Option<String> {
    profile_link(dom)
        .or_else(|| header_link_text(dom))
        .or_else(|| any_link_text(dom))
}

/// Strategy (a): a hyperlink whose first path segment is a plausible handle.
fn profile_link(dom: &DomIndex) -> Option<String> {
    dom.links.iter().find_map(|link| handle_from_href(&link.href))
}

/// Strategy (b): text of a link inside a header-like region.
fn header_link_text(dom: &DomIndex) -> Option<String> {
    dom.links
        .iter()
        .filter(|l| l.in_header)
        .map(|l| l.text.trim())
        .find(|t| is_valid_candidate(t))
        .map(str::to_string)
}

/// Strategy (c): any link text that could plausibly be a handle. The
/// charset check keeps multi-word UI copy ("Watch again") out of this
/// lowest-confidence path.
fn any_link_text(dom: &DomIndex) -> Option<String> {
    dom.links
        .iter()
        .map(|l| l.text.trim())
        .find(|t| is_valid_candidate(t) && has_handle_charset(t))
        .map(|t| t.trim_start_matches('@').to_string())
}

/// Non-empty, shorter than 30 chars, free of chrome strings.
fn is_valid_candidate(text: &str) -> bool {
    !text.is_empty()
        && text.chars().count() < MAX_HANDLE_LEN
        && !CHROME_TOKENS.iter().any(|t| text.contains(t))
}

/// Handles use the profile-path alphabet: alphanumerics, '.' and '_',
/// with an optional leading '@'.
fn has_handle_charset(text: &str) -> bool {
    let stripped = text.trim_start_matches('@');
    !stripped.is_empty()
        && stripped
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

/// Extract a plausible handle from an href's first path segment.
fn handle_from_href(href: &str) -> Option<String> {
    let path = match Url::parse(href) {
        Ok(url) => url.path().to_string(),
        // Relative href: treat it as a bare path
        Err(_) => href.split(['?', '#']).next().unwrap_or("").to_string(),
    };

    let first = path.trim_matches('/').split('/').next()?.trim();
    if first.is_empty() {
        return None;
    }
    if RESERVED_SEGMENTS.contains(&first.to_ascii_lowercase().as_str()) {
        return None;
    }

    let handle = first.trim_start_matches('@');
    if handle.chars().count() >= MAX_HANDLE_LEN {
        return None;
    }
    if !has_handle_charset(handle) || !is_valid_candidate(handle) {
        return None;
    }
    Some(handle.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::snapshot::DomIndex;

    #[test]
    fn test_profile_link_wins() {
        let dom = DomIndex::build(
            r#"<html><body>
                <a href="https://www.example.com/reel/ABC123/">Watch again</a>
                <a href="/chef_anna/">chef_anna</a>
            </body></html>"#,
        );
        assert_eq!(resolve(&dom), Some("chef_anna".to_string()));
    }

    #[test]
    fn test_reserved_segments_rejected() {
        for href in [
            "/reel/ABC123/",
            "/accounts/login/",
            "/explore/",
            "https://www.example.com/reels/audio/123/",
        ] {
            assert_eq!(handle_from_href(href), None, "href: {href}");
        }
    }

    #[test]
    fn test_reel_only_link_falls_through_to_absent() {
        // The only link is the reel itself with no usable text
        let dom = DomIndex::build(
            r#"<html><body><a href="/reel/ABC123/"></a></body></html>"#,
        );
        assert_eq!(resolve(&dom), None);
    }

    #[test]
    fn test_header_text_fallback() {
        let dom = DomIndex::build(
            r#"<html><body>
                <header><a href="/reel/ABC123/">chef.anna</a></header>
            </body></html>"#,
        );
        assert_eq!(resolve(&dom), Some("chef.anna".to_string()));
    }

    #[test]
    fn test_chrome_strings_rejected() {
        let dom = DomIndex::build(
            r#"<html><body>
                <header><a href="/accounts/login/">Log in</a></header>
                <a href="/explore/">Follow</a>
            </body></html>"#,
        );
        assert_eq!(resolve(&dom), None);
    }

    #[test]
    fn test_generic_fallback_rejects_ui_copy() {
        // Multi-word link text is navigation chrome, not a handle
        let dom = DomIndex::build(
            r#"<html><body>
                <a href="/reel/ABC123/">Watch again</a>
                <a href="/reel/DEF456/">See translation</a>
            </body></html>"#,
        );
        assert_eq!(resolve(&dom), None);
    }

    #[test]
    fn test_generic_fallback_accepts_handle_shaped_text() {
        let dom = DomIndex::build(
            r#"<html><body><a href="/reel/ABC123/">@chef_anna</a></body></html>"#,
        );
        assert_eq!(resolve(&dom), Some("chef_anna".to_string()));
    }

    #[test]
    fn test_handle_with_at_prefix() {
        assert_eq!(
            handle_from_href("/@chef_anna/"),
            Some("chef_anna".to_string())
        );
    }

    #[test]
    fn test_overlong_handle_rejected() {
        let long = format!("/{}/", "a".repeat(40));
        assert_eq!(handle_from_href(&long), None);
    }
}
