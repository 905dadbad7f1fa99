/// Stress text classification
///
/// This module provides:
/// - TF-IDF vectorization of free text
/// - Binary logistic regression scoring
/// - CSV loading of labeled training data
/// - Artifact persistence and the load-or-train startup path

pub mod artifacts;
pub mod classifier;
pub mod dataset;
pub mod features;
pub mod models;
pub mod service;

pub use classifier::{Classifier, LogisticRegressionClassifier};
pub use dataset::{load_training_csv, read_training_csv};
pub use features::{tokenize, TfidfVectorizer};
pub use models::{ClassMetrics, LabeledText, ModelMetadata, ModelMetrics, TrainingDataset};
pub use service::{StressModel, StressPrediction};
