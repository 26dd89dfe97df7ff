//! Meaningful-text predicate, parameterized by strategy strictness.

use std::sync::LazyLock;

use regex::Regex;
use verbatim_core::constants::DENYLIST;

static NUMERIC_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)\.]+$").expect("valid regex"));

/// Strictness policy for the meaningful-text predicate.
///
/// The lenient preset trades precision for recall (aggressive and
/// platform-aware passes); the strict preset is used when scoring columns
/// and cleaning the best-column output.
#[derive(Debug, Clone, Copy)]
pub struct TextPolicy {
    /// Reject candidates shorter than this many characters.
    pub min_len: usize,
    /// Reject candidates that are a single whitespace-delimited token.
    pub reject_single_token: bool,
    /// Reject candidates that exactly match the uninformative-answer denylist.
    pub use_denylist: bool,
}

impl TextPolicy {
    pub fn lenient() -> Self {
        Self {
            min_len: 2,
            reject_single_token: false,
            use_denylist: true,
        }
    }

    pub fn strict() -> Self {
        Self {
            min_len: 5,
            reject_single_token: true,
            use_denylist: true,
        }
    }

    /// Whether `text` counts as a meaningful free-text answer.
    pub fn is_meaningful(&self, text: &str) -> bool {
        let text = text.trim();
        if text.len() < self.min_len {
            return false;
        }
        // Pure numbers and symbols: ratings, phone fragments, etc.
        if NUMERIC_SYMBOL_RE.is_match(text) {
            return false;
        }
        if !text.chars().any(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        if self.reject_single_token && text.split_whitespace().count() < 2 {
            return false;
        }
        if self.use_denylist {
            let lower = text.to_lowercase();
            if DENYLIST.contains(&lower.as_str()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_rejects_short_text() {
        assert!(!TextPolicy::strict().is_meaningful("ok"));
    }

    #[test]
    fn denylist_rejects_case_insensitively() {
        let p = TextPolicy::lenient();
        assert!(!p.is_meaningful("N/A"));
        assert!(!p.is_meaningful("yes"));
        assert!(!p.is_meaningful("None"));
    }

    #[test]
    fn numeric_and_symbol_only_rejected() {
        let p = TextPolicy::lenient();
        assert!(!p.is_meaningful("42"));
        assert!(!p.is_meaningful("(555) 123-4567"));
        assert!(!p.is_meaningful("3.14 + 2"));
    }

    #[test]
    fn no_alphabetic_rejected() {
        assert!(!TextPolicy::lenient().is_meaningful("??? !!!"));
    }

    #[test]
    fn strict_rejects_single_token() {
        let p = TextPolicy::strict();
        assert!(!p.is_meaningful("excellent"));
        assert!(p.is_meaningful("excellent support"));
    }

    #[test]
    fn lenient_accepts_single_token() {
        assert!(TextPolicy::lenient().is_meaningful("excellent"));
    }

    #[test]
    fn real_answer_accepted() {
        let p = TextPolicy::strict();
        assert!(p.is_meaningful("The delivery was late and packaging was damaged"));
    }

    #[test]
    fn leading_whitespace_trimmed_before_checks() {
        assert!(!TextPolicy::lenient().is_meaningful("   no   "));
    }
}
