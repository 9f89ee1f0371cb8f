//! HTTP error handling and response conversion.
//!
//! API handler failures are mapped to HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`. Page handlers wrap the same errors in [`PageError`],
//! which renders an HTML error page instead. Messages returned to clients never
//! carry store or template details; those are logged instead.

use crate::{domain::shared::errors::DomainError, presentation::http::views::ErrorView};
use askama::Template;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Backing store unreachable (503).
    ServiceUnavailable(String),

    /// View template failed to render (500).
    Render(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::Render(msg) => write!(f, "Render error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Render(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource not found".into(),
            Self::ServiceUnavailable(_) => "Service temporarily unavailable".into(),
            Self::Render(_) => "Page could not be rendered".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }

    fn log(&self) {
        if self.status_code().is_server_error() {
            tracing::error!("error={}", self);
        } else {
            tracing::warn!("error={}", self);
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}

// === Template Error Conversion ===

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        tracing::error!(template_error = %err);
        AppError::Render(err.to_string())
    }
}

/// Error returned from HTML page handlers; responds with a rendered error page.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        Self(err.into())
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();
        let status = err.status_code();
        let view = ErrorView {
            status: status.as_u16(),
            message: err.user_message(),
        };

        match view.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(render_err) => {
                tracing::error!(template_error = %render_err, "error page failed to render");
                (status, err.user_message()).into_response()
            }
        }
    }
}
