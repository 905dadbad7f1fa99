use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use stress_detector::{
    config::Config,
    ml::{StressModel, StressPrediction},
    models::RecommendationBundle,
    recommendations::Recommender,
};

#[derive(Parser)]
#[command(name = "stress-cli")]
#[command(about = "Stress Detector CLI", long_about = None)]
struct Cli {
    /// Directory holding the model artifacts
    #[arg(short, long, global = true, env = "STRESS_DETECTOR_MODEL_DIR")]
    model_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a model from CSV and write the artifacts
    Train {
        /// Labeled CSV with `text` and `label` columns
        #[arg(short, long)]
        csv: Option<PathBuf>,
    },

    /// Score a text and print recommendations
    Predict {
        #[arg(value_name = "TEXT")]
        text: String,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print a recommendation bundle for a stress score
    Recommend {
        #[arg(short = 'p', long, value_parser = parse_score)]
        score: f64,

        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print a daily plan for a stress score
    Plan {
        #[arg(short = 'p', long, value_parser = parse_score)]
        score: f64,

        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// JSON printed by `predict`
#[derive(Serialize)]
struct PredictOutput {
    #[serde(flatten)]
    prediction: StressPrediction,
    recommendations: RecommendationBundle,
}

fn parse_score(value: &str) -> std::result::Result<f64, String> {
    let score: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(format!("score must be between 0 and 1, got {}", score))
    }
}

fn recommender(seed: Option<u64>) -> Recommender {
    seed.map(Recommender::with_seed).unwrap_or_default()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stress_detector=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    if let Some(dir) = cli.model_dir {
        config.model.model_dir = dir;
    }

    match cli.command {
        Commands::Train { csv } => {
            if let Some(csv) = csv {
                config.model.training_csv = csv;
            }

            let model = StressModel::train_from_csv(&config.model).with_context(|| {
                format!(
                    "training from {}",
                    config.model.training_csv.display()
                )
            })?;
            model
                .save(&config.model)
                .context("writing model artifacts")?;

            println!("{}", serde_json::to_string_pretty(model.metadata())?);
        }

        Commands::Predict { text, seed } => {
            let model = StressModel::load_or_train(&config.model)
                .context("loading the stress model")?;
            let prediction = model.predict(&text)?;
            let recommendations =
                recommender(seed).generate_recommendations(prediction.probability);

            let output = PredictOutput {
                prediction,
                recommendations,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Recommend { score, seed } => {
            let recommendations = recommender(seed).generate_recommendations(score);
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        }

        Commands::Plan { score, seed } => {
            let plan = recommender(seed).detailed_plan(score);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
