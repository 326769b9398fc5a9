use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, handlers, telemetry::track_http_metrics};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/intent", get(handlers::get_intent))
        .layer(middleware::from_fn(track_http_metrics))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
