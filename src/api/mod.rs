pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::ml::StressModel;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<StressModel>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(model: Arc<StressModel>) -> Self {
        Self {
            model,
            started_at: Instant::now(),
        }
    }
}
