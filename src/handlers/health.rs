use axum::http::StatusCode;

/// Liveness probe. Never consults the data source.
pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
