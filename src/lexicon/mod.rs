//! Lexicon-based polarity scoring.
//!
//! This module provides a valence-dictionary sentence scorer. Each word in
//! the lexicon carries a polarity in `[-1.0, 1.0]`; the sentence score is the
//! mean valence of the matched words, with negators flipping and dampening
//! the valence of the word they precede and intensifiers scaling it.
//!
//! The scorer runs over the ORIGINAL input text, not the preprocessed token
//! stream, so stop words like "not" and "very" still shape the score.
//!
//! # Examples
//!
//! ```
//! use shrike::lexicon::PolarityLexicon;
//!
//! let lexicon = PolarityLexicon::new();
//!
//! assert!(lexicon.polarity("This is great!") > 0.1);
//! assert!(lexicon.polarity("Terrible, awful service.") < -0.1);
//! assert_eq!(lexicon.polarity("The report was filed."), 0.0);
//! ```

use std::collections::{HashMap, HashSet};

/// How far back (in tokens) a negator or intensifier can reach.
const MODIFIER_WINDOW: usize = 2;

/// Dampening factor applied when a scored word is negated.
const NEGATION_FACTOR: f64 = -0.5;

/// Lexicon-based polarity scorer.
///
/// Produces a scalar polarity in `[-1.0, 1.0]` for a sentence, positive
/// meaning favorable tone.
pub struct PolarityLexicon {
    /// Word -> valence mapping, valences in [-1.0, 1.0].
    valences: HashMap<&'static str, f64>,
    /// Words that flip and dampen the valence of a following word.
    negators: HashSet<&'static str>,
    /// Words that scale the valence of a following word.
    intensifiers: HashMap<&'static str, f64>,
}

impl PolarityLexicon {
    /// Create a new polarity lexicon with the default English valences.
    pub fn new() -> Self {
        Self {
            valences: Self::default_valences(),
            negators: Self::default_negators(),
            intensifiers: Self::default_intensifiers(),
        }
    }

    /// Score the polarity of the given text.
    ///
    /// Returns the mean valence of the matched words, clamped to
    /// `[-1.0, 1.0]`. Text with no lexicon matches scores `0.0`.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);

        let mut assessments = Vec::new();
        for (idx, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token.as_str()) else {
                continue;
            };

            let mut score = valence;
            let window_start = idx.saturating_sub(MODIFIER_WINDOW);
            for prior in &tokens[window_start..idx] {
                if let Some(&factor) = self.intensifiers.get(prior.as_str()) {
                    score *= factor;
                }
                if self.negators.contains(prior.as_str()) {
                    score *= NEGATION_FACTOR;
                }
            }

            assessments.push(score.clamp(-1.0, 1.0));
        }

        if assessments.is_empty() {
            return 0.0;
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    /// Number of scored words in the lexicon.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Lowercase the text, strip everything that is not an ASCII letter or
    /// whitespace, and split into words. Contractions collapse the same way
    /// the preprocessing char filter collapses them ("don't" -> "dont").
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect::<String>()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn default_valences() -> HashMap<&'static str, f64> {
        let entries: &[(&str, f64)] = &[
            // Positive
            ("amazing", 0.6),
            ("awesome", 0.8),
            ("beautiful", 0.85),
            ("best", 1.0),
            ("better", 0.5),
            ("brilliant", 0.9),
            ("delightful", 0.8),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("excellent", 1.0),
            ("exceptional", 0.8),
            ("excited", 0.6),
            ("fantastic", 0.9),
            ("fine", 0.4),
            ("friendly", 0.5),
            ("glad", 0.5),
            ("good", 0.7),
            ("great", 0.8),
            ("happy", 0.8),
            ("helpful", 0.5),
            ("impressed", 0.6),
            ("impressive", 0.7),
            ("love", 0.5),
            ("loved", 0.7),
            ("nice", 0.6),
            ("outstanding", 0.9),
            ("perfect", 1.0),
            ("pleased", 0.6),
            ("recommend", 0.4),
            ("recommended", 0.4),
            ("reliable", 0.5),
            ("satisfied", 0.5),
            ("solid", 0.4),
            ("superb", 0.9),
            ("wonderful", 0.9),
            ("worth", 0.3),
            // Mild / near-neutral
            ("okay", 0.0),
            ("average", -0.05),
            ("special", 0.2),
            ("decent", 0.2),
            ("fair", 0.1),
            // Negative
            ("annoying", -0.6),
            ("atrocious", -0.9),
            ("avoid", -0.4),
            ("awful", -1.0),
            ("bad", -0.7),
            ("boring", -0.5),
            ("broken", -0.4),
            ("cheap", -0.3),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("disgusting", -0.9),
            ("dreadful", -0.9),
            ("hate", -0.8),
            ("hated", -0.9),
            ("horrible", -1.0),
            ("mediocre", -0.3),
            ("pathetic", -0.8),
            ("poor", -0.4),
            ("sad", -0.5),
            ("slow", -0.3),
            ("terrible", -1.0),
            ("unhappy", -0.6),
            ("unreliable", -0.5),
            ("upset", -0.5),
            ("useless", -0.6),
            ("waste", -0.6),
            ("worse", -0.6),
            ("worst", -1.0),
            ("wrong", -0.5),
        ];

        entries.iter().copied().collect()
    }

    fn default_negators() -> HashSet<&'static str> {
        [
            "not", "no", "never", "nor", "cannot", "cant", "dont", "didnt", "doesnt", "isnt",
            "wasnt", "wont", "couldnt", "shouldnt", "wouldnt", "aint", "hardly", "barely",
        ]
        .into_iter()
        .collect()
    }

    fn default_intensifiers() -> HashMap<&'static str, f64> {
        [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.6),
            ("highly", 1.4),
            ("absolutely", 1.5),
            ("completely", 1.4),
            ("totally", 1.4),
            ("incredibly", 1.6),
            ("so", 1.2),
            ("quite", 1.1),
        ]
        .into_iter()
        .collect()
    }
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PolarityLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolarityLexicon")
            .field("valences", &self.valences.len())
            .field("negators", &self.negators.len())
            .field("intensifiers", &self.intensifiers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_positive() {
        let lexicon = PolarityLexicon::new();

        assert!(lexicon.polarity("This is amazing! I love it!") > 0.1);
        assert!(lexicon.polarity("Great product, highly recommended!") > 0.1);
        assert!(lexicon.polarity("I love it!") > 0.1);
    }

    #[test]
    fn test_polarity_negative() {
        let lexicon = PolarityLexicon::new();

        assert!(lexicon.polarity("Terrible experience, don't buy!") < -0.1);
        assert!(lexicon.polarity("Worst product ever!") < -0.1);
        assert!(lexicon.polarity("Awful service, very unhappy!") < -0.1);
    }

    #[test]
    fn test_polarity_no_matches() {
        let lexicon = PolarityLexicon::new();

        assert_eq!(lexicon.polarity("The quarterly report was filed."), 0.0);
        assert_eq!(lexicon.polarity(""), 0.0);
        assert_eq!(lexicon.polarity("12345"), 0.0);
    }

    #[test]
    fn test_polarity_range() {
        let lexicon = PolarityLexicon::new();

        for text in [
            "perfect excellent best wonderful",
            "worst awful terrible horrible",
            "extremely absolutely perfect",
        ] {
            let polarity = lexicon.polarity(text);
            assert!((-1.0..=1.0).contains(&polarity), "out of range for {text}");
        }
    }

    #[test]
    fn test_negation_flips_valence() {
        let lexicon = PolarityLexicon::new();

        let plain = lexicon.polarity("bad");
        let negated = lexicon.polarity("not bad");

        assert!(plain < -0.1);
        assert!(negated > 0.0);
    }

    #[test]
    fn test_intensifier_scales_valence() {
        let lexicon = PolarityLexicon::new();

        let plain = lexicon.polarity("good");
        let intensified = lexicon.polarity("very good");

        assert!(intensified > plain);
    }

    #[test]
    fn test_contraction_negator() {
        let lexicon = PolarityLexicon::new();

        // "don't" collapses to "dont", which still counts as a negator
        // for the word that follows it.
        let negated = lexicon.polarity("don't love");
        let plain = lexicon.polarity("love");

        assert!(negated < 0.0);
        assert!(plain > 0.0);
    }
}
