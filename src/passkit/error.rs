//! Upstream error taxonomy.

use reqwest::StatusCode;
use serde::Deserialize;

/// Domain error reported by the upstream service.
///
/// This is the distinguished family the error simulation recovers from.
/// Everything else in [`ServiceError`] propagates as a server error.
#[derive(Debug, thiserror::Error)]
#[error("upstream service error ({status}): {description}")]
pub struct ApiError {
    pub status: StatusCode,
    pub description: String,
    pub details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Error body returned by the upstream service alongside a 4xx/5xx status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub details: Option<String>,
}
