use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::recommendations::Recommender;
use crate::templates::{self, ResultView};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Input form page
pub async fn index() -> Result<Html<String>> {
    Ok(Html(templates::render_index()?))
}

#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub text: String,
}

/// Score the submitted text and render the recommendations
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>> {
    let prediction = state.model.predict(&form.text)?;

    // The bundle recomputes its tier from the probability
    let recommendations = Recommender::new().generate_recommendations(prediction.probability);

    tracing::info!(
        level = prediction.level.as_str(),
        probability = prediction.probability,
        text_len = form.text.len(),
        "Prediction served"
    );

    let view = ResultView::new(prediction.probability, &recommendations);
    Ok(Html(templates::render_result(&view)?))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let metadata = state.model.metadata();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        model: ModelSummary {
            name: metadata.name.clone(),
            trained_at: metadata.trained_at,
            n_features: metadata.n_features,
            n_training_samples: metadata.n_training_samples,
        },
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model: ModelSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSummary {
    pub name: String,
    pub trained_at: chrono::DateTime<chrono::Utc>,
    pub n_features: usize,
    pub n_training_samples: usize,
}

/// Prometheus metrics endpoint
///
/// Returns metrics in Prometheus text exposition format
pub async fn metrics() -> (StatusCode, String) {
    (StatusCode::OK, crate::metrics::gather_metrics())
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Turn a handler panic into the 500 page
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
