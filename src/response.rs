use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, FieldError};

pub type ApiResult<T> = Result<T, AppError>;

/// Error payload returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

impl ErrorResponse {
    pub(crate) fn from_error(err: &AppError) -> Self {
        let detail = match err {
            AppError::Validation(fields) => ErrorDetail::Fields(fields.clone()),
            other => ErrorDetail::Message(other.message().to_string()),
        };
        Self { detail }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            log_app_error(&self, status);
        }
        (status, Json(ErrorResponse::from_error(&self))).into_response()
    }
}

pub(crate) fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    tracing::error!(status = status.as_u16(), error = %err, "request failed");
}
