use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::content::ContentError;

#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Input(String),
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, detail) = match self {
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, detail.to_string()),
            AppError::Input(detail) => (StatusCode::BAD_REQUEST, detail),
            AppError::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail.to_string()),
        };

        (code, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the error and turn it into a 500.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;

    /// Turn the error into a 400 carrying the error's own message.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::info!("{msg}: {e}");
            AppError::Input(format!("{msg}: {e}"))
        })
    }
}

pub trait ContentResultExt<T> {
    /// Missing content becomes a 404 with `detail`; anything else is a 500.
    fn or_not_found(self, detail: &'static str) -> Result<T, AppError>;
}

impl<T> ContentResultExt<T> for Result<T, ContentError> {
    fn or_not_found(self, detail: &'static str) -> Result<T, AppError> {
        self.map_err(|e| match e {
            ContentError::NotFound { .. } => {
                tracing::debug!("{e}");
                AppError::NotFound(detail)
            }
            ContentError::Parse { .. } => {
                tracing::error!("{e}");
                AppError::Internal("content file could not be parsed")
            }
            ContentError::Io { .. } => {
                tracing::error!("{e}");
                AppError::Internal("content file could not be read")
            }
        })
    }
}
