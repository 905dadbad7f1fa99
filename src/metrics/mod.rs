//! Prometheus metrics for the stress detector.
//!
//! Metrics live in a process-wide registry; call [`init_metrics`] once at
//! startup and serve [`gather_metrics`] from `/metrics`.
//!
//! # Example
//! ```no_run
//! use stress_detector::metrics::PREDICTIONS_TOTAL;
//!
//! PREDICTIONS_TOTAL.with_label_values(&["low"]).inc();
//! ```

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Histogram, HistogramOpts, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry for all metrics
    pub static ref PROMETHEUS_REGISTRY: Registry = Registry::new();

    /// Total number of texts scored
    ///
    /// Labels: level
    pub static ref PREDICTIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("predictions_total", "Total number of texts scored")
            .namespace("stress_detector"),
        &["level"]
    ).expect("Failed to create PREDICTIONS_TOTAL metric");

    /// Time spent vectorizing and scoring a text
    pub static ref PREDICTION_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "prediction_duration_seconds",
            "Time spent vectorizing and scoring a text"
        )
        .namespace("stress_detector")
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5])
    ).expect("Failed to create PREDICTION_DURATION_SECONDS metric");

    /// Number of times a model was fitted from CSV
    pub static ref MODEL_TRAININGS_TOTAL: Counter = Counter::with_opts(
        Opts::new("model_trainings_total", "Number of times a model was fitted")
            .namespace("stress_detector")
    ).expect("Failed to create MODEL_TRAININGS_TOTAL metric");

    /// Error pages served
    ///
    /// Labels: status
    pub static ref ERROR_PAGES_TOTAL: CounterVec = CounterVec::new(
        Opts::new("error_pages_total", "Error pages served")
            .namespace("stress_detector"),
        &["status"]
    ).expect("Failed to create ERROR_PAGES_TOTAL metric");
}

/// Register all metrics with the global registry
pub fn init_metrics() -> Result<(), prometheus::Error> {
    PROMETHEUS_REGISTRY.register(Box::new(PREDICTIONS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(PREDICTION_DURATION_SECONDS.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(MODEL_TRAININGS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(ERROR_PAGES_TOTAL.clone()))?;

    Ok(())
}

/// Encode registered metrics in the Prometheus text format
pub fn gather_metrics() -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = PROMETHEUS_REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::from("# Error encoding metrics\n");
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Failed to convert metrics to string: {}", e);
        String::from("# Error converting metrics\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_initialization_and_export() {
        // The registry is global; a second registration reports AlreadyReg
        let _ = init_metrics();

        PREDICTIONS_TOTAL.with_label_values(&["moderate"]).inc();
        let output = gather_metrics();

        assert!(output.contains("stress_detector_predictions_total"));
        assert!(output.contains("level=\"moderate\""));
    }
}
