//! HTTP error taxonomy.
//!
//! Each variant's display string is the exact `message` the client sees;
//! handlers return `Result<_, ApiError>` and let the `IntoResponse` impl
//! shape the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No current interview data available.")]
    NoCurrentInterview,

    #[error("Historical interview not found.")]
    HistoryNotFound,

    #[error("Failed to generate report.")]
    Export(#[source] serde_json::Error),

    /// Store backend failure. Unreachable with the in-memory store;
    /// exists for substituted backends.
    #[error("Internal server error.")]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoCurrentInterview | Self::HistoryNotFound => StatusCode::NOT_FOUND,
            Self::Export(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Export(source) => error!(error = %source, "report generation failed"),
            Self::Store(source) => error!(error = ?source, "store backend error"),
            _ => {}
        }
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}
