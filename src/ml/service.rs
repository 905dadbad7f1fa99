use crate::config::ModelConfig;
use crate::error::{AppError, Result};
use crate::ml::artifacts::{load_artifact, save_artifact};
use crate::ml::classifier::{Classifier, LogisticRegressionClassifier};
use crate::ml::dataset::load_training_csv;
use crate::ml::features::TfidfVectorizer;
use crate::ml::models::{LabeledText, ModelMetadata, TrainingDataset};
use crate::models::StressLevel;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

/// Outcome of scoring one text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StressPrediction {
    /// Positive-class probability in [0, 1]
    pub probability: f64,

    /// Tier derived from the probability
    pub level: StressLevel,
}

/// Fitted vectorizer + classifier pair, immutable once built
#[derive(Debug, Clone)]
pub struct StressModel {
    vectorizer: TfidfVectorizer,
    classifier: LogisticRegressionClassifier,
}

impl StressModel {
    /// Fit a new model on labeled texts
    pub fn train(samples: &[LabeledText], alpha: f64) -> Result<Self> {
        let texts: Vec<&str> = samples.iter().map(|s| s.text.as_str()).collect();
        let labels: Vec<usize> = samples.iter().map(|s| s.label).collect();

        let mut vectorizer = TfidfVectorizer::new();
        let features = vectorizer.fit_transform(&texts)?;
        let dataset = TrainingDataset::new(features, labels);

        info!(
            samples = dataset.n_samples,
            vocab_size = vectorizer.vocab_size(),
            "Training stress classifier"
        );

        let mut classifier = LogisticRegressionClassifier::new(alpha);
        let metrics = classifier.train(&dataset)?;

        info!(
            "Stress classifier trained - Accuracy: {:.2}%, F1: {:.3}",
            metrics.accuracy * 100.0,
            metrics.f1_score
        );
        crate::metrics::MODEL_TRAININGS_TOTAL.inc();

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Fit a new model from the configured CSV file
    pub fn train_from_csv(config: &ModelConfig) -> Result<Self> {
        let samples = load_training_csv(&config.training_csv)?;
        Self::train(&samples, config.alpha)
    }

    /// Deserialize both artifacts
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let classifier: LogisticRegressionClassifier = load_artifact(&config.classifier_path())?;
        let vectorizer: TfidfVectorizer = load_artifact(&config.vectorizer_path())?;

        if !classifier.is_trained() || !vectorizer.is_fitted() {
            return Err(AppError::NotTrained(
                "Stored artifacts are not fitted".to_string(),
            ));
        }

        if classifier.metadata().n_features != vectorizer.n_features() {
            return Err(AppError::Serialization(format!(
                "Classifier expects {} features but vectorizer produces {}",
                classifier.metadata().n_features,
                vectorizer.n_features()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Serialize both artifacts under the model directory
    pub fn save(&self, config: &ModelConfig) -> Result<()> {
        save_artifact(&config.classifier_path(), &self.classifier)?;
        save_artifact(&config.vectorizer_path(), &self.vectorizer)?;

        info!(dir = %config.model_dir.display(), "Model artifacts saved");
        Ok(())
    }

    /// Load stored artifacts, or train from CSV and store them when absent.
    ///
    /// Only a missing artifact file triggers training; any other load
    /// failure is returned.
    pub fn load_or_train(config: &ModelConfig) -> Result<Self> {
        match Self::load(config) {
            Ok(model) => {
                let metadata = model.metadata();
                info!(
                    trained_at = %metadata.trained_at,
                    n_features = metadata.n_features,
                    "Loaded stress model from {}",
                    config.model_dir.display()
                );
                Ok(model)
            }
            Err(e) if e.is_missing_file() => {
                warn!(
                    "Model artifacts not found ({}); training from {}",
                    e,
                    config.training_csv.display()
                );
                let model = Self::train_from_csv(config)?;
                model.save(config)?;
                Ok(model)
            }
            Err(e) => Err(e),
        }
    }

    /// Probability that the text expresses stress
    pub fn predict_probability(&self, text: &str) -> Result<f64> {
        let row = self.vectorizer.transform(text)?;
        let features = row.insert_axis(ndarray::Axis(0));
        let proba = self.classifier.predict_proba(&features)?;
        Ok(proba[[0, 1]])
    }

    /// Score a text and map it to a tier
    pub fn predict(&self, text: &str) -> Result<StressPrediction> {
        let start = Instant::now();

        let probability = self.predict_probability(text)?;
        let level = StressLevel::from_probability(probability);

        crate::metrics::PREDICTION_DURATION_SECONDS.observe(start.elapsed().as_secs_f64());
        crate::metrics::PREDICTIONS_TOTAL
            .with_label_values(&[level.as_str()])
            .inc();

        Ok(StressPrediction { probability, level })
    }

    /// Metadata of the fitted classifier
    pub fn metadata(&self) -> &ModelMetadata {
        self.classifier.metadata()
    }

    /// Vocabulary size of the fitted vectorizer
    pub fn vocab_size(&self) -> usize {
        self.vectorizer.vocab_size()
    }
}
