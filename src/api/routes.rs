use crate::api::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict))
        // Operational endpoints
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .fallback(handlers::not_found)
        // Add state
        .with_state(state);

    with_middleware(router)
}

/// Wrap a router in the panic-to-500 and request tracing layers
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(false))
                .on_response(DefaultOnResponse::new().include_headers(false)),
        )
}
