use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure reading the backing store. The display text is what clients see.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not read {file}. Did you run the intent engine?")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {file}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to open database")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to query analytics table")]
    Query(#[source] sqlx::Error),

    #[error("Failed to decode analytics row")]
    Decode(#[source] sqlx::Error),
}

impl SourceError {
    /// Short label used as a metric attribute.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Read { .. } => "read",
            SourceError::Parse { .. } => "parse",
            SourceError::Connect(_) => "connect",
            SourceError::Query(_) => "query",
            SourceError::Decode(_) => "decode",
        }
    }

    fn cause(&self) -> String {
        match self {
            SourceError::Read { source, .. } => source.to_string(),
            SourceError::Parse { source, .. } => source.to_string(),
            SourceError::Connect(e) | SourceError::Query(e) | SourceError::Decode(e) => {
                e.to_string()
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to encode response")]
    Encode(#[source] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Source(e) => {
                tracing::error!(kind = e.kind(), error = %e.cause(), "Data source error");
            }
            AppError::Encode(e) => {
                tracing::error!(error = %e, "Response encoding error");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
