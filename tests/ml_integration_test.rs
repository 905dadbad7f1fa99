/// Integration tests for the stress model lifecycle
///
/// These tests verify the complete ML pipeline:
/// - Training from a labeled CSV
/// - Persisting and reloading artifacts
/// - Scoring texts into stress tiers

use std::path::Path;
use stress_detector::{
    config::ModelConfig,
    ml::StressModel,
    models::StressLevel,
    AppError,
};
use tempfile::TempDir;

const TRAINING_CSV: &str = "\
text,label,subreddit
\"I can't sleep because I keep worrying about my exams\",1,anxiety
\"My boss keeps piling on work and I feel like I am drowning\",1,work
\"I panic every time my phone rings, my heart races\",1,anxiety
\"I feel overwhelmed by bills and can't pay rent this month\",1,finance
\"I'm exhausted, anxious and can't focus on anything\",1,anxiety
\"The deadlines are crushing me and I'm falling behind\",1,work
\"I cry every night because everything feels overwhelming\",1,relationships
\"My chest is tight and I'm anxious all day\",1,anxiety
\"Had a lovely walk in the park with my dog\",0,life
\"We cooked dinner together and watched a funny movie\",0,life
\"Finished a good book today and feel relaxed\",0,books
\"The weekend trip to the lake was peaceful and fun\",0,travel
\"I enjoyed a quiet cup of coffee on the porch\",0,life
\"Yoga class was calming and I slept really well\",0,fitness
\"Spent a relaxed evening painting and listening to music\",0,art
\"We had a picnic by the river and watched the sunset\",0,travel
";

fn setup_model_config(dir: &Path) -> ModelConfig {
    let csv_path = dir.join("Stress.csv");
    std::fs::write(&csv_path, TRAINING_CSV).unwrap();

    ModelConfig {
        model_dir: dir.join("model"),
        training_csv: csv_path,
        ..ModelConfig::default()
    }
}

#[test]
fn test_first_run_trains_and_persists_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = setup_model_config(dir.path());

    assert!(!config.classifier_path().exists());
    assert!(!config.vectorizer_path().exists());

    let model = StressModel::load_or_train(&config).unwrap();

    assert!(config.classifier_path().exists());
    assert!(config.vectorizer_path().exists());
    assert_eq!(model.metadata().n_training_samples, 16);
    assert_eq!(model.metadata().n_features, model.vocab_size());
}

#[test]
fn test_second_run_loads_identical_model() {
    let dir = TempDir::new().unwrap();
    let config = setup_model_config(dir.path());

    let trained = StressModel::load_or_train(&config).unwrap();

    // Without the CSV the only way to succeed is loading the stored artifacts
    std::fs::remove_file(&config.training_csv).unwrap();
    let loaded = StressModel::load_or_train(&config).unwrap();

    assert_eq!(trained.metadata().trained_at, loaded.metadata().trained_at);
    for text in [
        "I am anxious and overwhelmed",
        "a calm walk in the park",
        "",
        "zzz qqq unseen words",
    ] {
        let a = trained.predict_probability(text).unwrap();
        let b = loaded.predict_probability(text).unwrap();
        assert_eq!(a, b, "probabilities differ for {:?}", text);
    }
}

#[test]
fn test_stressed_text_scores_higher_than_calm_text() {
    let dir = TempDir::new().unwrap();
    let config = setup_model_config(dir.path());
    let model = StressModel::load_or_train(&config).unwrap();

    let stressed = model
        .predict("I'm anxious, overwhelmed and I can't sleep")
        .unwrap();
    let calm = model
        .predict("a relaxed and peaceful walk in the park")
        .unwrap();

    assert!(stressed.probability > calm.probability);
    assert!((0.0..=1.0).contains(&stressed.probability));
    assert!((0.0..=1.0).contains(&calm.probability));
    assert_eq!(
        stressed.level,
        StressLevel::from_probability(stressed.probability)
    );
}

#[test]
fn test_missing_training_data_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = ModelConfig {
        model_dir: dir.path().join("model"),
        training_csv: dir.path().join("absent.csv"),
        ..ModelConfig::default()
    };

    let result = StressModel::load_or_train(&config);
    assert!(matches!(result, Err(AppError::Dataset(_))));
}

#[test]
fn test_corrupt_artifact_is_not_retrained() {
    let dir = TempDir::new().unwrap();
    let config = setup_model_config(dir.path());
    StressModel::load_or_train(&config).unwrap();

    std::fs::write(config.classifier_path(), b"not a model").unwrap();

    let result = StressModel::load_or_train(&config);
    assert!(matches!(result, Err(AppError::Serialization(_))));
}

#[test]
fn test_explicit_train_and_save() {
    let dir = TempDir::new().unwrap();
    let config = setup_model_config(dir.path());

    let model = StressModel::train_from_csv(&config).unwrap();
    model.save(&config).unwrap();

    let loaded = StressModel::load(&config).unwrap();
    assert_eq!(loaded.vocab_size(), model.vocab_size());
}
