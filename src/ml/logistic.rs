//! Multinomial logistic regression classifier.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Learning rate for batch gradient descent.
const LEARNING_RATE: f64 = 0.5;

/// Number of gradient descent epochs.
const EPOCHS: usize = 500;

/// L2 regularization strength.
const L2_PENALTY: f64 = 1e-3;

/// Multinomial logistic regression trained with batch gradient descent.
///
/// Weights are initialized to zero and the descent schedule is fixed, so
/// fitting the same data always produces the same model.
#[derive(Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Per-class weight vectors, `n_classes x n_features`.
    weights: Vec<Vec<f64>>,
    /// Per-class bias terms.
    bias: Vec<f64>,
    /// Number of classes.
    n_classes: usize,
}

impl std::fmt::Debug for LogisticRegression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogisticRegression")
            .field("n_classes", &self.n_classes)
            .field("n_features", &self.n_features())
            .finish()
    }
}

impl LogisticRegression {
    /// Fit a classifier on the given samples.
    ///
    /// `targets` holds the class index of each sample, in `0..n_classes`.
    pub fn fit(samples: &[Vec<f64>], targets: &[usize], n_classes: usize) -> Result<Self> {
        if samples.is_empty() {
            anyhow::bail!("Training samples cannot be empty");
        }
        if samples.len() != targets.len() {
            anyhow::bail!(
                "Sample count {} does not match target count {}",
                samples.len(),
                targets.len()
            );
        }
        if n_classes < 2 {
            anyhow::bail!("At least two classes are required");
        }
        if let Some(&bad) = targets.iter().find(|&&t| t >= n_classes) {
            anyhow::bail!("Target class {bad} is out of range for {n_classes} classes");
        }

        let n_features = samples[0].len();
        if samples.iter().any(|s| s.len() != n_features) {
            anyhow::bail!("All samples must have {n_features} features");
        }

        let mut model = Self {
            weights: vec![vec![0.0; n_features]; n_classes],
            bias: vec![0.0; n_classes],
            n_classes,
        };

        let n_samples = samples.len() as f64;
        for _ in 0..EPOCHS {
            let mut weight_grad = vec![vec![0.0; n_features]; n_classes];
            let mut bias_grad = vec![0.0; n_classes];

            for (sample, &target) in samples.iter().zip(targets) {
                let probs = model.predict_proba(sample);
                for class in 0..n_classes {
                    let error = probs[class] - if class == target { 1.0 } else { 0.0 };
                    for (grad, &feature) in weight_grad[class].iter_mut().zip(sample) {
                        *grad += error * feature;
                    }
                    bias_grad[class] += error;
                }
            }

            for class in 0..n_classes {
                for (weight, grad) in model.weights[class].iter_mut().zip(&weight_grad[class]) {
                    *weight -= LEARNING_RATE * (grad / n_samples + L2_PENALTY * *weight);
                }
                model.bias[class] -= LEARNING_RATE * bias_grad[class] / n_samples;
            }
        }

        Ok(model)
    }

    /// Per-class probability distribution for a feature vector.
    ///
    /// Uses a max-shifted softmax for numeric stability; the returned
    /// probabilities sum to 1.
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(weights, bias)| {
                weights
                    .iter()
                    .zip(features)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + bias
            })
            .collect();

        let max_logit = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max_logit).exp()).collect();
        let total: f64 = exps.iter().sum();

        exps.iter().map(|e| e / total).collect()
    }

    /// Predicted class index for a feature vector.
    pub fn predict(&self, features: &[f64]) -> usize {
        let probs = self.predict_proba(features);
        probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }

    /// Number of classes this classifier was trained on.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of input features this classifier expects.
    pub fn n_features(&self) -> usize {
        self.weights.first().map(Vec::len).unwrap_or(0)
    }
}
