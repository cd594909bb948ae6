//! Engagement count resolution
//!
//! Likes, views, and comments share one resolution shape: a prioritized
//! chain of text patterns, falling back to accessibility labels, with all
//! numeric literals funneled through [`parse_count`]. Each metric resolves
//! independently; partial results are expected.

use crate::extraction::snapshot::DomIndex;
use regex::Regex;

/// Which engagement count to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Like count
    Likes,
    /// View/play count
    Views,
    /// Comment count
    Comments,
}

impl Metric {
    /// Keyword forms that identify this metric in an accessibility label.
    /// Views keeps plural forms only so "View comments" does not match.
    fn aria_keywords(&self) -> &'static [&'static str] {
        match self {
            Metric::Likes => &["like"],
            Metric::Views => &["views", "plays"],
            Metric::Comments => &["comment"],
        }
    }

    /// Alternation fragment for use inside a regex.
    fn keyword_pattern(&self) -> &'static str {
        match self {
            Metric::Likes => "likes?",
            Metric::Views => "views?|plays?",
            Metric::Comments => "comments?",
        }
    }
}

/// Normalize a numeric literal with optional thousands separators and an
/// optional K/M/B magnitude suffix into an integer.
///
/// Malformed or empty input normalizes to 0.
///
/// ```
/// use reelscope::extraction::parse_count;
///
/// assert_eq!(parse_count("1.2K"), 1_200);
/// assert_eq!(parse_count("817,242"), 817_242);
/// assert_eq!(parse_count("2.5M"), 2_500_000);
/// assert_eq!(parse_count(""), 0);
/// ```
pub fn parse_count(raw: &str) -> u64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return 0;
    }

    let (numeral, multiplier) = match cleaned.chars().last() {
        Some('k') | Some('K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('m') | Some('M') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        Some('b') | Some('B') => (&cleaned[..cleaned.len() - 1], 1_000_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    // A single remaining '.' acts as a decimal point; anything else
    // (including the "inf"/"NaN" forms f64 would happily parse) is
    // malformed and normalizes to 0.
    let dots = numeral.matches('.').count();
    if numeral.is_empty()
        || dots > 1
        || !numeral.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return 0;
    }
    let value: f64 = numeral.parse().unwrap_or(0.0);
    (value * multiplier).round() as u64
}

/// Resolve one metric from page text and the DOM index.
///
/// Strategy order: comma-grouped literal next to the keyword, compact
/// suffixed literal next to the keyword or a synonym phrase, then an
/// aria-label on an interactive control mentioning the keyword.
pub fn resolve(metric: Metric, text: &str, dom: &DomIndex) -> Option<u64> {
    grouped_literal(metric, text)
        .or_else(|| compact_literal(metric, text))
        .or_else(|| synonym_phrase(metric, text))
        .or_else(|| aria_label(metric, dom))
}

/// `817,242 likes` style: comma-grouped digits adjacent to the keyword.
fn grouped_literal(metric: Metric, text: &str) -> Option<u64> {
    let pattern = format!(
        r"(?i)\b(\d{{1,3}}(?:,\d{{3}})+)\s*(?:{})\b",
        metric.keyword_pattern()
    );
    let re = Regex::new(&pattern).unwrap();
    let caps = re.captures(text)?;
    Some(parse_count(&caps[1]))
}

/// `1.2K views` style: compact literal with an optional magnitude suffix.
fn compact_literal(metric: Metric, text: &str) -> Option<u64> {
    let pattern = format!(
        r"(?i)\b(\d+(?:\.\d+)?)\s*([KMB])?\s*(?:{})\b",
        metric.keyword_pattern()
    );
    let re = Regex::new(&pattern).unwrap();
    let caps = re.captures(text)?;
    let suffix = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    Some(parse_count(&format!("{}{}", &caps[1], suffix)))
}

/// Metric-specific copy variants: "Liked by a and N others",
/// "View all N comments".
fn synonym_phrase(metric: Metric, text: &str) -> Option<u64> {
    let pattern = match metric {
        Metric::Likes => r"(?i)Liked by .{1,80}? and ([\d.,]+\s*[KMB]?) others",
        Metric::Comments => r"(?i)View all ([\d.,]+\s*[KMB]?) comments",
        Metric::Views => return None,
    };
    let re = Regex::new(pattern).unwrap();
    let caps = re.captures(text)?;
    Some(parse_count(&caps[1]))
}

/// Accessibility label on an interactive control, e.g.
/// `aria-label="Like: 1.2K likes"`.
fn aria_label(metric: Metric, dom: &DomIndex) -> Option<u64> {
    let number = Regex::new(r"(\d[\d.,]*\s*[KMBkmb]?)\b").unwrap();
    for label in &dom.aria_labels {
        let lower = label.to_lowercase();
        if !metric.aria_keywords().iter().any(|k| lower.contains(k)) {
            continue;
        }
        if let Some(caps) = number.captures(label) {
            return Some(parse_count(&caps[1]));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::snapshot::DomIndex;

    #[test]
    fn test_parse_count_plain() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count("817,242"), 817_242);
        assert_eq!(parse_count("1,234,567"), 1_234_567);
    }

    #[test]
    fn test_parse_count_suffixed() {
        assert_eq!(parse_count("1.2K"), 1_200);
        assert_eq!(parse_count("2.5M"), 2_500_000);
        assert_eq!(parse_count("3B"), 3_000_000_000);
        assert_eq!(parse_count("1.5b"), 1_500_000_000);
    }

    #[test]
    fn test_parse_count_malformed() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("garbage"), 0);
        assert_eq!(parse_count("K"), 0);
        assert_eq!(parse_count("1.2.3"), 0);
        assert_eq!(parse_count("-5"), 0);
    }

    #[test]
    fn test_parse_count_whitespace() {
        assert_eq!(parse_count(" 42 000 "), 42_000);
        assert_eq!(parse_count("1.2 K"), 1_200);
    }

    #[test]
    fn test_grouped_literal_wins() {
        let dom = DomIndex::default();
        let text = "817,242 likes\n1,024 comments";
        assert_eq!(resolve(Metric::Likes, text, &dom), Some(817_242));
        assert_eq!(resolve(Metric::Comments, text, &dom), Some(1_024));
        assert_eq!(resolve(Metric::Views, text, &dom), None);
    }

    #[test]
    fn test_compact_literal() {
        let dom = DomIndex::default();
        assert_eq!(resolve(Metric::Views, "1.2M views", &dom), Some(1_200_000));
        assert_eq!(resolve(Metric::Views, "984 plays", &dom), Some(984));
        assert_eq!(resolve(Metric::Likes, "3.4K likes", &dom), Some(3_400));
    }

    #[test]
    fn test_synonym_phrases() {
        let dom = DomIndex::default();
        assert_eq!(
            resolve(Metric::Likes, "Liked by chef_anna and 12,408 others", &dom),
            Some(12_408)
        );
        assert_eq!(
            resolve(Metric::Comments, "View all 96 comments", &dom),
            Some(96)
        );
    }

    #[test]
    fn test_aria_label_fallback() {
        let dom = DomIndex::build(
            r#"<html><body><button aria-label="Like: 1.2K likes"></button></body></html>"#,
        );
        assert_eq!(resolve(Metric::Likes, "", &dom), Some(1_200));
        assert_eq!(resolve(Metric::Views, "", &dom), None);
    }

    #[test]
    fn test_metrics_are_independent() {
        let dom = DomIndex::default();
        let text = "42,000 likes";
        assert_eq!(resolve(Metric::Likes, text, &dom), Some(42_000));
        assert_eq!(resolve(Metric::Views, text, &dom), None);
        assert_eq!(resolve(Metric::Comments, text, &dom), None);
    }
}
