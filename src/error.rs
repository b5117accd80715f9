use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use serde::Serialize;
use validator::ValidationErrors;

use crate::db::dao::DaoLayerError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const VALIDATION_ERROR_MESSAGE: &str = "Request validation failed";

/// A single field-level problem reported back with a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(Vec<FieldError>),
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::Internal(message) => message.as_str(),
            Self::Validation(_) => VALIDATION_ERROR_MESSAGE,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { entity, .. } => {
                AppError::not_found(format!("{entity} not found"))
            }
            DaoLayerError::Db(db_err) => {
                tracing::error!(error = %db_err, "database operation failed");
                AppError::internal(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("invalid value for {field}"));
                    FieldError::new(field.to_string(), message, error.code.to_string())
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        AppError::validation(fields)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(vec![FieldError::new(
            "body",
            rejection.body_text(),
            "invalid_body",
        )])
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(vec![FieldError::new(
            "path",
            rejection.body_text(),
            "invalid_path",
        )])
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation(vec![FieldError::new(
            "query",
            rejection.body_text(),
            "invalid_query",
        )])
    }
}
