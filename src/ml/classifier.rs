use crate::error::{AppError, Result};
use crate::ml::models::{ClassMetrics, ModelMetadata, ModelMetrics, TrainingDataset};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};
use std::collections::HashMap;

/// Number of classes for the stressed / not stressed problem
const N_CLASSES: usize = 2;

/// Trait for binary text classifiers
pub trait Classifier: Send + Sync {
    /// Train the classifier
    fn train(&mut self, dataset: &TrainingDataset) -> Result<ModelMetrics>;

    /// Predict class labels
    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>>;

    /// Predict class probabilities, one column per class
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array2<f64>>;

    /// Get model metadata
    fn metadata(&self) -> &ModelMetadata;

    /// Check if model is trained
    fn is_trained(&self) -> bool;
}

/// Logistic Regression Classifier
///
/// Fitting is delegated to smartcore; the learned coefficients are copied out
/// so the model can be serialized and scored without the smartcore type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegressionClassifier {
    /// Model metadata
    metadata: ModelMetadata,

    /// L2 penalty
    alpha: f64,

    /// Model weights, one per feature
    weights: Option<Array1<f64>>,

    /// Model bias
    bias: Option<f64>,
}

impl LogisticRegressionClassifier {
    pub fn new(alpha: f64) -> Self {
        Self {
            metadata: ModelMetadata {
                name: "Logistic Regression".to_string(),
                trained_at: chrono::Utc::now(),
                n_training_samples: 0,
                n_features: 0,
                training_metrics: ModelMetrics::new(),
                hyperparameters: [("alpha".to_string(), alpha.to_string())]
                    .into_iter()
                    .collect(),
            },
            alpha,
            weights: None,
            bias: None,
        }
    }

    fn ndarray_to_densematrix(arr: &Array2<f64>) -> DenseMatrix<f64> {
        let shape = arr.shape();
        let data: Vec<f64> = arr.iter().copied().collect();
        DenseMatrix::new(shape[0], shape[1], data, false)
    }

    fn vec_to_labels(vec: &[usize]) -> Vec<i32> {
        vec.iter().map(|&x| x as i32).collect()
    }

    /// Copy the fitted coefficients and intercept out of smartcore
    fn extract_parameters(
        model: &LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>,
        n_features: usize,
    ) -> Result<(Array1<f64>, f64)> {
        let coefficients = model.coefficients();
        let (rows, cols) = coefficients.shape();

        let weights: Array1<f64> = if rows == 1 && cols == n_features {
            (0..cols).map(|j| *coefficients.get((0, j))).collect()
        } else if cols == 1 && rows == n_features {
            (0..rows).map(|i| *coefficients.get((i, 0))).collect()
        } else {
            return Err(AppError::Training(format!(
                "Unexpected coefficient shape {}x{} for {} features",
                rows, cols, n_features
            )));
        };

        let bias = *model.intercept().get((0, 0));

        Ok((weights, bias))
    }

    /// Positive-class probability per row
    fn positive_probability(&self, features: &Array2<f64>) -> Result<Array1<f64>> {
        let (weights, bias) = match (&self.weights, self.bias) {
            (Some(weights), Some(bias)) => (weights, bias),
            _ => return Err(AppError::NotTrained("Model not trained".to_string())),
        };

        if features.ncols() != weights.len() {
            return Err(AppError::Prediction(format!(
                "Expected {} features, got {}",
                weights.len(),
                features.ncols()
            )));
        }

        Ok(features.dot(weights).mapv(|z| sigmoid(z + bias)))
    }

    fn calculate_metrics(y_true: &[usize], y_pred: &[usize]) -> ModelMetrics {
        let n_samples = y_true.len();
        if n_samples == 0 {
            return ModelMetrics::new();
        }

        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count();
        let accuracy = correct as f64 / n_samples as f64;

        let mut per_class = HashMap::new();

        for class_idx in 0..N_CLASSES {
            let tp = y_true
                .iter()
                .zip(y_pred.iter())
                .filter(|(t, p)| **t == class_idx && **p == class_idx)
                .count();

            let fp = y_pred
                .iter()
                .zip(y_true.iter())
                .filter(|(p, t)| **p == class_idx && **t != class_idx)
                .count();

            let fn_count = y_true
                .iter()
                .zip(y_pred.iter())
                .filter(|(t, p)| **t == class_idx && **p != class_idx)
                .count();

            let precision = if tp + fp > 0 {
                tp as f64 / (tp + fp) as f64
            } else {
                0.0
            };

            let recall = if tp + fn_count > 0 {
                tp as f64 / (tp + fn_count) as f64
            } else {
                0.0
            };

            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            let support = y_true.iter().filter(|&&t| t == class_idx).count();

            per_class.insert(
                format!("class_{}", class_idx),
                ClassMetrics {
                    precision,
                    recall,
                    f1_score: f1,
                    support,
                },
            );
        }

        let n = N_CLASSES as f64;
        ModelMetrics {
            accuracy,
            precision: per_class.values().map(|m| m.precision).sum::<f64>() / n,
            recall: per_class.values().map(|m| m.recall).sum::<f64>() / n,
            f1_score: per_class.values().map(|m| m.f1_score).sum::<f64>() / n,
            per_class_metrics: per_class,
        }
    }
}

impl Classifier for LogisticRegressionClassifier {
    fn train(&mut self, dataset: &TrainingDataset) -> Result<ModelMetrics> {
        if dataset.n_samples == 0 || dataset.labels.len() != dataset.n_samples {
            return Err(AppError::Training(format!(
                "Dataset has {} rows and {} labels",
                dataset.n_samples,
                dataset.labels.len()
            )));
        }

        if let Some(bad) = dataset.labels.iter().find(|&&label| label >= N_CLASSES) {
            return Err(AppError::Training(format!("Label {} is not binary", bad)));
        }

        if dataset.class_counts().len() < N_CLASSES {
            return Err(AppError::Training(
                "Training data must contain both classes".to_string(),
            ));
        }

        let x = Self::ndarray_to_densematrix(&dataset.features);
        let y = Self::vec_to_labels(&dataset.labels);

        let params = LogisticRegressionParameters::default().with_alpha(self.alpha);
        let model = LogisticRegression::fit(&x, &y, params).map_err(|e| {
            AppError::Training(format!("Failed to train logistic regression: {}", e))
        })?;

        let (weights, bias) = Self::extract_parameters(&model, dataset.n_features)?;
        self.weights = Some(weights);
        self.bias = Some(bias);

        let predictions = self.predict(&dataset.features)?;
        let metrics = Self::calculate_metrics(&dataset.labels, &predictions);

        self.metadata.n_training_samples = dataset.n_samples;
        self.metadata.n_features = dataset.n_features;
        self.metadata.trained_at = chrono::Utc::now();
        self.metadata.training_metrics = metrics.clone();

        Ok(metrics)
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>> {
        let proba = self.positive_probability(features)?;
        Ok(proba.iter().map(|&p| usize::from(p >= 0.5)).collect())
    }

    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array2<f64>> {
        let positive = self.positive_probability(features)?;
        let mut proba = Array2::zeros((positive.len(), N_CLASSES));

        for (i, &p) in positive.iter().enumerate() {
            proba[[i, 0]] = 1.0 - p;
            proba[[i, 1]] = p;
        }

        Ok(proba)
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn is_trained(&self) -> bool {
        self.weights.is_some()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
