use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata stored alongside a fitted classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Algorithm name
    pub name: String,

    /// When the model was fitted
    pub trained_at: chrono::DateTime<chrono::Utc>,

    /// Number of training samples
    pub n_training_samples: usize,

    /// Width of the feature vectors
    pub n_features: usize,

    /// Metrics measured on the training set
    pub training_metrics: ModelMetrics,

    /// Hyperparameters used for fitting
    pub hyperparameters: HashMap<String, String>,
}

/// Classification metrics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelMetrics {
    pub accuracy: f64,

    /// Macro-averaged precision
    pub precision: f64,

    /// Macro-averaged recall
    pub recall: f64,

    /// Macro-averaged F1
    pub f1_score: f64,

    /// Per-class breakdown, keyed `class_0` / `class_1`
    pub per_class_metrics: HashMap<String, ClassMetrics>,
}

impl ModelMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: usize,
}

/// One row of the labeled training CSV
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledText {
    pub text: String,

    /// 1 = stressed, 0 = not stressed
    pub label: usize,
}

impl LabeledText {
    pub fn new(text: impl Into<String>, label: usize) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Vectorized training data
#[derive(Debug, Clone)]
pub struct TrainingDataset {
    /// Feature matrix (n_samples × n_features)
    pub features: Array2<f64>,

    /// Binary labels, one per row
    pub labels: Vec<usize>,

    /// Number of samples
    pub n_samples: usize,

    /// Number of features
    pub n_features: usize,
}

impl TrainingDataset {
    pub fn new(features: Array2<f64>, labels: Vec<usize>) -> Self {
        let (n_samples, n_features) = features.dim();
        Self {
            features,
            labels,
            n_samples,
            n_features,
        }
    }

    /// Count of rows per label
    pub fn class_counts(&self) -> HashMap<usize, usize> {
        let mut counts = HashMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_dimensions() {
        let features = Array2::zeros((3, 5));
        let dataset = TrainingDataset::new(features, vec![0, 1, 1]);

        assert_eq!(dataset.n_samples, 3);
        assert_eq!(dataset.n_features, 5);

        let counts = dataset.class_counts();
        assert_eq!(counts[&0], 1);
        assert_eq!(counts[&1], 2);
    }
}
