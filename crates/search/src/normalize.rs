//! Text normalization shared by every similarity measure.

use std::collections::BTreeSet;

/// Lowercased text together with its alphanumeric tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    lowered: String,
    tokens: Vec<String>,
}

impl NormalizedText {
    /// The whole input, lowercased.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Tokens in their original order.
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true if the input produced no tokens.
    #[inline]
    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Tokens sorted lexicographically, duplicates kept.
    pub fn sorted_tokens(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.tokens.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// Distinct tokens in lexicographic order.
    pub fn token_set(&self) -> BTreeSet<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }
}

/// Lowercase `text` and split it on non-alphanumeric boundaries.
///
/// Empty runs are discarded, so `"Jwara (Fever)"` yields `["jwara", "fever"]`
/// and punctuation-only input yields no tokens at all.
pub fn normalize(text: &str) -> NormalizedText {
    let lowered = text.to_lowercase();
    let tokens = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect();

    NormalizedText { lowered, tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_splits() {
        let text = normalize("Jwara (Fever)");
        assert_eq!(text.as_str(), "jwara (fever)");
        assert_eq!(text.tokens(), ["jwara", "fever"]);
    }

    #[test]
    fn test_normalize_empty() {
        let text = normalize("");
        assert_eq!(text.as_str(), "");
        assert!(!text.has_tokens());
    }

    #[test]
    fn test_normalize_punctuation_only() {
        let text = normalize("--- (/) ---");
        assert!(!text.has_tokens());
        assert_eq!(text.as_str(), "--- (/) ---");
    }

    #[test]
    fn test_normalize_keeps_digits_and_unicode_letters() {
        let text = normalize("Type-2 Madhumeha/ज्वर");
        assert_eq!(text.tokens()[0], "type");
        assert_eq!(text.tokens()[1], "2");
        assert_eq!(text.tokens()[2], "madhumeha");
        assert!(text.tokens().len() >= 4);
    }

    #[test]
    fn test_sorted_tokens_keeps_duplicates() {
        let text = normalize("fever, high fever");
        assert_eq!(text.sorted_tokens(), vec!["fever", "fever", "high"]);
        assert_eq!(text.token_set().len(), 2);
    }
}
