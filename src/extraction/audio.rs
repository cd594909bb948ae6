//! Audio attribution resolution
//!
//! Unlike every other field, audio is never left absent: when no strategy
//! matches, the fixed sentinel [`AUDIO_SENTINEL`] is used instead.

use crate::extraction::snapshot::DomIndex;
use regex::Regex;

/// Sentinel applied when no audio marker is found on the page.
pub const AUDIO_SENTINEL: &str = "Audio not detected";

/// Path fragments identifying an audio/sound attribution link target.
const AUDIO_PATH_MARKERS: &[&str] = &["/audio/", "/music/", "/sounds/"];

/// Known player status phrases, accepted verbatim as a last resort.
const STATUS_PHRASES: &[&str] = &["Original audio", "Audio is muted", "Sound on", "Sound off"];

/// Chrome fragments that disqualify a bullet-pattern candidate.
const EXCLUDED_FRAGMENTS: &[&str] = &["Follow", "Log in", "Sign up", "likes", "views", "comments"];

const MAX_ATTRIBUTION_LEN: usize = 100;

/// Resolve the audio attribution. Always yields a value.
pub fn resolve(text: &str, dom: &DomIndex) -> String {
    attribution_link(dom)
        .or_else(|| bullet_pattern(text))
        .or_else(|| status_phrase(text))
        .unwrap_or_else(|| AUDIO_SENTINEL.to_string())
}

/// Strategy (a): a hyperlink pointing at an audio attribution page; its
/// text is the value verbatim.
fn attribution_link(dom: &DomIndex) -> Option<String> {
    dom.links
        .iter()
        .find(|l| {
            !l.text.is_empty() && AUDIO_PATH_MARKERS.iter().any(|m| l.href.contains(m))
        })
        .map(|l| l.text.clone())
}

/// Strategy (b): an `Artist • Track` line in the page text.
fn bullet_pattern(text: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^\s*([^•\n]{2,60} • [^•\n]{2,60})\s*$").unwrap();
    let result = re
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .find(|candidate| {
            candidate.chars().count() <= MAX_ATTRIBUTION_LEN
                && !EXCLUDED_FRAGMENTS.iter().any(|f| candidate.contains(f))
        });
    result
}

/// Strategy (c): a known player status phrase present anywhere in the text.
fn status_phrase(text: &str) -> Option<String> {
    STATUS_PHRASES
        .iter()
        .find(|phrase| text.contains(*phrase))
        .map(|phrase| phrase.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::snapshot::DomIndex;

    #[test]
    fn test_attribution_link_wins() {
        let dom = DomIndex::build(
            r#"<html><body>
                <a href="/reels/audio/98765/">Daft Punk • Harder Better</a>
            </body></html>"#,
        );
        let text = "Original audio";
        assert_eq!(resolve(text, &dom), "Daft Punk • Harder Better");
    }

    #[test]
    fn test_bullet_pattern() {
        let dom = DomIndex::default();
        let text = "chef_anna\nDaft Punk • One More Time\n42,000 likes";
        assert_eq!(resolve(text, &dom), "Daft Punk • One More Time");
    }

    #[test]
    fn test_bullet_pattern_rejects_chrome() {
        let dom = DomIndex::default();
        // Bullet line is navigation chrome, not attribution
        let text = "Log in • Sign up\nOriginal audio";
        assert_eq!(resolve(text, &dom), "Original audio");
    }

    #[test]
    fn test_status_phrases() {
        let dom = DomIndex::default();
        assert_eq!(resolve("something\nAudio is muted", &dom), "Audio is muted");
        assert_eq!(resolve("Sound on", &dom), "Sound on");
    }

    #[test]
    fn test_sentinel_when_nothing_matches() {
        let dom = DomIndex::default();
        assert_eq!(resolve("no markers here", &dom), AUDIO_SENTINEL);
        assert_eq!(resolve("", &dom), AUDIO_SENTINEL);
    }
}
