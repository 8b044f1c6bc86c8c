use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    response::{ApiResponse, Meta},
    validation::FormErrors,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("{message}")]
    Validation {
        message: String,
        errors: FormErrors,
        input: serde_json::Value,
    },

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

#[derive(Serialize)]
struct ValidationData {
    errors: FormErrors,
    input: serde_json::Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        match self {
            AppError::Validation { errors, input, .. } => {
                let body = ApiResponse {
                    message,
                    data: Some(ValidationData { errors, input }),
                    meta: Some(Meta::empty()),
                };
                (status, axum::Json(body)).into_response()
            }
            other => {
                let body = ApiResponse {
                    message,
                    data: Some(ErrorData {
                        error: other.to_string(),
                    }),
                    meta: Some(Meta::empty()),
                };
                (status, axum::Json(body)).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
