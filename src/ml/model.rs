//! Persisted sentiment model artifact.
//!
//! The artifact couples a fitted [`TfIdfVectorizer`] with a fitted
//! [`LogisticRegression`] classifier. It is created once at startup (or
//! loaded from disk) and is immutable for the process lifetime.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShrikeError};
use crate::ml::corpus::TRAINING_CORPUS;
use crate::ml::logistic::LogisticRegression;
use crate::ml::tfidf::TfIdfVectorizer;
use crate::sentiment::Sentiment;

/// Vocabulary cap for the feature vectorizer.
const MAX_FEATURES: usize = 1000;

/// Where the model came from during bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// Deserialized from an existing artifact file.
    Loaded,
    /// Freshly fitted on the bootstrap corpus.
    Trained,
}

/// A fitted vectorizer + classifier pair.
#[derive(Clone, Serialize, Deserialize)]
pub struct SentimentModel {
    vectorizer: TfIdfVectorizer,
    classifier: LogisticRegression,
    labels: Vec<Sentiment>,
}

impl std::fmt::Debug for SentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentModel")
            .field("vectorizer", &self.vectorizer)
            .field("classifier", &self.classifier)
            .field("labels", &self.labels)
            .finish()
    }
}

impl SentimentModel {
    /// Fit a new model on the bootstrap corpus.
    pub fn train() -> Result<Self> {
        let documents: Vec<String> = TRAINING_CORPUS
            .iter()
            .map(|(text, _)| text.to_string())
            .collect();
        let targets: Vec<usize> = TRAINING_CORPUS
            .iter()
            .map(|(_, label)| label.class_index())
            .collect();

        let mut vectorizer = TfIdfVectorizer::new(MAX_FEATURES);
        vectorizer.fit(&documents)?;

        let samples: Vec<Vec<f64>> = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect();
        let classifier = LogisticRegression::fit(&samples, &targets, Sentiment::CLASSES.len())?;

        Ok(Self {
            vectorizer,
            classifier,
            labels: Sentiment::CLASSES.to_vec(),
        })
    }

    /// Predict the label and its probability for preprocessed text.
    ///
    /// Returns the predicted label together with the highest class
    /// probability. Fails on artifact corruption (dimension mismatch) or
    /// non-finite probabilities; callers treat a failure as "no classifier
    /// signal".
    pub fn predict(&self, processed_text: &str) -> Result<(Sentiment, f64)> {
        let features = self.vectorizer.transform(processed_text);
        if features.len() != self.classifier.n_features() {
            return Err(ShrikeError::model(format!(
                "Feature length {} does not match classifier input {}",
                features.len(),
                self.classifier.n_features()
            )));
        }

        let probabilities = self.classifier.predict_proba(&features);
        if probabilities.len() != self.labels.len() {
            return Err(ShrikeError::model(format!(
                "Class count {} does not match label count {}",
                probabilities.len(),
                self.labels.len()
            )));
        }
        if probabilities.iter().any(|p| !p.is_finite()) {
            return Err(ShrikeError::model("Non-finite class probability"));
        }

        let (best, &max_proba) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or_else(|| ShrikeError::model("Empty probability distribution"))?;

        Ok((self.labels[best], max_proba))
    }

    /// Serialize the model to the given path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self)
            .map_err(|e| ShrikeError::serialization(format!("Failed to encode model: {e}")))?;
        Ok(())
    }

    /// Deserialize a model from the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let model = bincode::deserialize_from(reader)
            .map_err(|e| ShrikeError::serialization(format!("Failed to decode model: {e}")))?;
        Ok(model)
    }

    /// Load the persisted model, or train and persist a fresh one.
    ///
    /// A missing or undecodable artifact file leads to training; the fresh
    /// model is written back so later starts can reuse it. A failed write is
    /// logged and does not abort, the in-memory model is still usable.
    pub fn load_or_train<P: AsRef<Path>>(path: P) -> Result<(Self, ModelSource)> {
        let path = path.as_ref();

        if path.exists() {
            match Self::load(path) {
                Ok(model) => return Ok((model, ModelSource::Loaded)),
                Err(e) => {
                    log::warn!("Discarding unreadable model artifact {}: {e}", path.display());
                }
            }
        }

        let model = Self::train()?;
        if let Err(e) = model.save(path) {
            log::warn!("Failed to persist model artifact {}: {e}", path.display());
        }

        Ok((model, ModelSource::Trained))
    }
}
