use axum::response::IntoResponse;
use http::StatusCode;
use thiserror::Error;

use crate::external::holdings_source::HoldingsSourceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Load failed: {0}")]
    LoadFailed(String),
    #[error("Not ready: {0}")]
    NotReady(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::LoadFailed(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
            AppError::NotReady(msg) => (StatusCode::CONFLICT, msg).into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    }
}

impl From<HoldingsSourceError> for AppError {
    fn from(value: HoldingsSourceError) -> Self {
        AppError::LoadFailed(value.to_string())
    }
}
