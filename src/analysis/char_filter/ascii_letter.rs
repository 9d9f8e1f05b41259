//! ASCII letter char filter implementation.
//!
//! This module provides a filter that strips every character that is not an
//! ASCII letter or whitespace. Digits, punctuation, and non-ASCII characters
//! are removed entirely, so `"don't"` becomes `"dont"` and `"abc123"`
//! becomes `"abc"`.
//!
//! # Examples
//!
//! ```
//! use shrike::analysis::char_filter::CharFilter;
//! use shrike::analysis::char_filter::ascii_letter::AsciiLetterFilter;
//!
//! let filter = AsciiLetterFilter::new();
//! assert_eq!(filter.filter("Great product, 10/10!"), "Great product ");
//! ```

use super::CharFilter;

/// A filter that keeps only ASCII letters and whitespace.
#[derive(Clone, Debug, Default)]
pub struct AsciiLetterFilter;

impl AsciiLetterFilter {
    /// Create a new ASCII letter filter.
    pub fn new() -> Self {
        AsciiLetterFilter
    }
}

impl CharFilter for AsciiLetterFilter {
    fn filter(&self, text: &str) -> String {
        text.chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect()
    }

    fn name(&self) -> &'static str {
        "ascii_letter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letter_filter() {
        let filter = AsciiLetterFilter::new();

        assert_eq!(filter.filter("hello world"), "hello world");
        assert_eq!(filter.filter("don't stop!"), "dont stop");
        assert_eq!(filter.filter("abc123def"), "abcdef");
    }

    #[test]
    fn test_ascii_letter_filter_preserves_whitespace() {
        let filter = AsciiLetterFilter::new();

        assert_eq!(filter.filter("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_ascii_letter_filter_all_stripped() {
        let filter = AsciiLetterFilter::new();

        assert_eq!(filter.filter("123 456!"), " ");
        assert_eq!(filter.filter("!!!"), "");
    }

    #[test]
    fn test_ascii_letter_filter_non_ascii() {
        let filter = AsciiLetterFilter::new();

        // Non-ASCII letters are removed along with punctuation.
        assert_eq!(filter.filter("café"), "caf");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AsciiLetterFilter::new().name(), "ascii_letter");
    }
}
