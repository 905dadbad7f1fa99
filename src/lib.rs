//! Stress level detection from free text.
//!
//! Text is vectorized with TF-IDF and scored by a binary logistic
//! regression. The resulting probability is bucketed into a
//! [`models::StressLevel`] and paired with randomly selected self-care
//! suggestions from fixed per-tier tables.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod ml;
pub mod models;
pub mod recommendations;
pub mod templates;

pub use error::{AppError, Result};
