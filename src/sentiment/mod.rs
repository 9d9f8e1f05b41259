//! Sentiment scoring: labels, scores, and the scorer itself.

use serde::{Deserialize, Serialize};

pub mod analyzer;

pub use analyzer::{ClassifierSignal, SentimentAnalyzer};

/// Sentiment polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favorable tone.
    Positive,
    /// No clear tone either way.
    Neutral,
    /// Unfavorable tone.
    Negative,
}

impl Sentiment {
    /// All labels in class-index order (sorted by name).
    ///
    /// This is the ordering used for classifier class indices.
    pub const CLASSES: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// The lowercase wire name of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// The class index of this label in [`Sentiment::CLASSES`].
    pub fn class_index(&self) -> usize {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Neutral => 1,
            Sentiment::Positive => 2,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of scoring a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// The sentiment label.
    pub sentiment: Sentiment,
    /// Certainty in the label, in [0.0, 1.0].
    pub confidence: f64,
}

impl SentimentScore {
    /// Create a new score.
    pub fn new(sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            sentiment,
            confidence,
        }
    }

    /// The fixed score for input with no signal (empty or all stop words).
    pub fn no_signal() -> Self {
        Self::new(Sentiment::Neutral, 0.5)
    }
}
