//! The sentiment scorer.
//!
//! Combines the lexicon polarity estimate with the optional classifier
//! signal into a final `(label, confidence)` pair.

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;
use crate::lexicon::PolarityLexicon;
use crate::ml::SentimentModel;
use crate::sentiment::{Sentiment, SentimentScore};

/// Polarity above this threshold reads as positive, below its negation as
/// negative.
const POLARITY_THRESHOLD: f64 = 0.1;

/// Confidence floor kept when the classifier disagrees with the lexicon.
const DISAGREEMENT_FLOOR: f64 = 0.3;

/// Outcome of the classification step.
///
/// The fallback path is an explicit variant rather than an error so the
/// reconciliation step can branch on it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifierSignal {
    /// The classifier produced a label and its top class probability.
    Prediction {
        sentiment: Sentiment,
        max_proba: f64,
    },
    /// The classifier could not produce a usable signal; score with the
    /// lexicon only.
    Fallback,
}

/// Scores free text for sentiment polarity.
///
/// Constructed once at startup and immutable afterwards; safe to share
/// across concurrent requests behind an `Arc`.
#[derive(Debug)]
pub struct SentimentAnalyzer {
    analyzer: EnglishAnalyzer,
    lexicon: PolarityLexicon,
    model: Option<SentimentModel>,
}

impl SentimentAnalyzer {
    /// Create a new scorer.
    ///
    /// Pass `None` for the model to score with the lexicon alone.
    pub fn new(model: Option<SentimentModel>) -> Result<Self> {
        Ok(Self {
            analyzer: EnglishAnalyzer::new()?,
            lexicon: PolarityLexicon::new(),
            model,
        })
    }

    /// Whether a classifier artifact is attached.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Score the given text.
    ///
    /// Never fails: analysis faults collapse into the lexicon-only path, and
    /// input without signal scores `(neutral, 0.5)` exactly.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::no_signal();
        }

        let processed = self.preprocess(text);
        if processed.is_empty() {
            return SentimentScore::no_signal();
        }

        // Lexicon scoring runs over the original text so negators and
        // intensifiers survive.
        let polarity = self.lexicon.polarity(text);
        let sentiment = if polarity > POLARITY_THRESHOLD {
            Sentiment::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        let base_confidence = polarity.abs().clamp(0.1, 1.0);

        let confidence = match self.classify(&processed) {
            ClassifierSignal::Prediction {
                sentiment: predicted,
                max_proba,
            } if predicted == sentiment => (base_confidence + max_proba) / 2.0,
            ClassifierSignal::Prediction { .. } => base_confidence.max(DISAGREEMENT_FLOOR),
            ClassifierSignal::Fallback => base_confidence,
        };

        SentimentScore::new(sentiment, confidence)
    }

    /// Run the analysis pipeline and rejoin the surviving tokens.
    ///
    /// Empty output means "no signal"; a pipeline fault is treated the same
    /// way rather than surfacing to the caller.
    pub fn preprocess(&self, text: &str) -> String {
        match self.analyzer.analyze(text) {
            Ok(tokens) => {
                let words: Vec<String> = tokens.map(|token| token.text).collect();
                words.join(" ")
            }
            Err(e) => {
                log::debug!("Preprocessing failed, treating as no signal: {e}");
                String::new()
            }
        }
    }

    /// Obtain the classifier's signal for preprocessed text.
    fn classify(&self, processed: &str) -> ClassifierSignal {
        let Some(model) = &self.model else {
            return ClassifierSignal::Fallback;
        };

        match model.predict(processed) {
            Ok((sentiment, max_proba)) => ClassifierSignal::Prediction {
                sentiment,
                max_proba,
            },
            Err(e) => {
                log::debug!("Classifier fallback: {e}");
                ClassifierSignal::Fallback
            }
        }
    }
}
