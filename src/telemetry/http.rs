use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderName, Response, header::USER_AGENT},
    middleware::Next,
    response::Response as AxumResponse,
};
use opentelemetry::KeyValue;
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Span;

use super::{HTTP_REQUEST_DURATION, HTTP_REQUESTS_TOTAL};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Clone)]
pub struct HttpMakeSpan;

impl<B> MakeSpan<B> for HttpMakeSpan {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let method = request.method();
        let uri = request.uri();

        tracing::info_span!(
            "HTTP request",
            otel.name = %format!("{} {}", method, uri.path()),
            http.request.method = %method,
            url.path = %uri.path(),
            url.full = %uri,
            network.protocol.version = ?request.version(),
            user_agent.original = header_str(request, &USER_AGENT),
            http.request_id = header_str(request, &X_REQUEST_ID),
            http.response.status_code = tracing::field::Empty,
            otel.status_code = tracing::field::Empty,
        )
    }
}

fn header_str<'a, B>(request: &'a axum::http::Request<B>, name: &HeaderName) -> &'a str {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[derive(Clone)]
pub struct HttpOnResponse;

impl<B> OnResponse<B> for HttpOnResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status();

        span.record("http.response.status_code", u64::from(status.as_u16()));
        span.record(
            "otel.status_code",
            if status.is_server_error() { "ERROR" } else { "OK" },
        );

        tracing::info!(
            http.response.status_code = u64::from(status.as_u16()),
            latency_ms = latency.as_secs_f64() * 1000.0,
            "finished processing request"
        );
    }
}

/// Counts requests and records their latency, keyed by method, matched route
/// and status class.
pub async fn track_http_metrics(request: Request, next: Next) -> AxumResponse {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let attributes = [
        KeyValue::new("http.request.method", method),
        KeyValue::new("http.route", route),
        KeyValue::new("http.response.status_code", i64::from(status)),
        KeyValue::new("http.status_class", format!("{}xx", status / 100)),
    ];

    HTTP_REQUESTS_TOTAL.add(1, &attributes);
    HTTP_REQUEST_DURATION.record(started.elapsed().as_secs_f64() * 1000.0, &attributes);

    response
}
