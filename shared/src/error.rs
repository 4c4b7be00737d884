use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::error::Error;
use thiserror::Error;

use crate::env::{which, Environment};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing or invalid fields in request body")]
    ValidationError(#[from] garde::Report),
    #[error("request body could not be parsed: {0}")]
    InvalidRequestBody(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("the record conflicts with an existing one")]
    ConstraintViolation(#[source] sqlx::Error),
    #[error("a value was rejected by the database")]
    InvalidValue(#[source] sqlx::Error),
    #[error("the database is unavailable")]
    DatabaseUnavailable(#[source] sqlx::Error),
    #[error("database query failed")]
    DbQueryError(#[source] sqlx::Error),
    #[error("unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidRequestBody(_)
            | AppError::InvalidRequest(_)
            | AppError::InvalidValue(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::DatabaseUnavailable(_)
            | AppError::DbQueryError(_)
            | AppError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({ "error": self.to_string() });

        if let AppError::ValidationError(report) = &self {
            let fields: Vec<_> = report
                .iter()
                .map(|(path, error)| {
                    json!({ "field": path.to_string(), "message": error.to_string() })
                })
                .collect();
            body["fields"] = fields.into();
        }

        if which() == Environment::Development {
            if let Some(source) = self.source() {
                body["detail"] = json!(source.to_string());
            }
        }

        if status.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}
