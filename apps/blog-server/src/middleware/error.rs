//! Error handling - every failure ends the request with a plain-text body.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use blog_core::StoreError;
use std::fmt;

use crate::views::RenderError;

/// Application-level error type.
///
/// Store, input and rendering failures are all reported as 500 with the raw
/// error message as body.
#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Input(String),
    Render(RenderError),
    MethodNotAllowed,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store(err) => write!(f, "{}", err),
            AppError::Input(msg) => write!(f, "{}", msg),
            AppError::Render(err) => write!(f, "{}", err),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

/// Query-string decoding failures surface like any other error.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req: &HttpRequest| AppError::Input(err.to_string()).into())
}

/// Largest accepted URL-encoded form body.
pub const FORM_LIMIT: usize = 10 * 1024 * 1024;

/// Form-body decoding failures surface like any other error.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT)
        .error_handler(|err, _req: &HttpRequest| AppError::Input(err.to_string()).into())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
