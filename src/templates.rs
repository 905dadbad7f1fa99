//! HTML pages, embedded into the binary and rendered with Tera.

use crate::error::Result;
use crate::models::RecommendationBundle;
use axum::http::StatusCode;
use once_cell::sync::Lazy;
use serde::Serialize;
use tera::{Context, Tera};

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("result.html", include_str!("../templates/result.html")),
        ("404.html", include_str!("../templates/404.html")),
        ("500.html", include_str!("../templates/500.html")),
    ])
    .expect("embedded templates must parse");
    tera
});

/// Values shown on the result page
#[derive(Debug, Serialize)]
pub struct ResultView<'a> {
    /// Display label, e.g. "Moderate"
    pub stress_level: String,

    /// Raw positive-class probability
    pub confidence: f64,

    pub recommendations: &'a RecommendationBundle,
}

impl<'a> ResultView<'a> {
    pub fn new(confidence: f64, recommendations: &'a RecommendationBundle) -> Self {
        Self {
            stress_level: crate::models::StressLevel::from_probability(confidence).to_string(),
            confidence,
            recommendations,
        }
    }
}

pub fn render_index() -> Result<String> {
    Ok(TEMPLATES.render("index.html", &Context::new())?)
}

pub fn render_result(view: &ResultView<'_>) -> Result<String> {
    let mut context = Context::from_serialize(view)?;
    context.insert("level_key", view.recommendations.stress_level.as_str());
    Ok(TEMPLATES.render("result.html", &context)?)
}

/// Render the fixed error page for a status; never fails
pub fn render_error_page(status: StatusCode) -> String {
    let template = if status == StatusCode::NOT_FOUND {
        "404.html"
    } else {
        "500.html"
    };

    TEMPLATES
        .render(template, &Context::new())
        .unwrap_or_else(|e| {
            tracing::error!("Failed to render {}: {}", template, e);
            format!("<h1>{}</h1>", status)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::Recommender;

    #[test]
    fn test_index_has_text_form() {
        let html = render_index().unwrap();
        assert!(html.contains("action=\"/predict\""));
        assert!(html.contains("name=\"text\""));
    }

    #[test]
    fn test_result_page_shows_bundle() {
        let bundle = Recommender::with_seed(5).generate_recommendations(0.9);
        let html = render_result(&ResultView::new(0.9, &bundle)).unwrap();

        assert!(html.contains("Severe"));
        assert!(html.contains("Stress probability: 0.9"));
        // Tera autoescapes the apostrophe in the notice
        assert!(html.contains("Your stress levels appear to be severe"));
        for action in &bundle.immediate_actions {
            assert!(html.contains(action.as_str()));
        }
    }

    #[test]
    fn test_result_page_without_notice() {
        let bundle = Recommender::with_seed(5).generate_recommendations(0.1);
        let html = render_result(&ResultView::new(0.1, &bundle)).unwrap();

        assert!(html.contains("Low"));
        assert!(!html.contains("urgent-notice"));
    }

    #[test]
    fn test_probability_near_threshold_matches_label() {
        let bundle = Recommender::with_seed(5).generate_recommendations(0.29996);
        let html = render_result(&ResultView::new(0.29996, &bundle)).unwrap();

        assert!(html.contains(">Low</span>"));
        assert!(html.contains("Stress probability: 0.29996"));
        assert!(!html.contains("30.0"));
    }

    #[test]
    fn test_error_pages() {
        assert!(render_error_page(StatusCode::NOT_FOUND).contains("Page Not Found"));
        assert!(render_error_page(StatusCode::INTERNAL_SERVER_ERROR)
            .contains("Something Went Wrong"));
    }
}
