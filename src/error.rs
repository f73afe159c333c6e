//! Error types for the Smart Calendar core

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::event::Event;

/// Failure kinds reported to presenters and API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FailureKind {
    InvalidInput,
    InvalidTimeRange,
    SchedulingConflict,
    NotFound,
    RepositoryFailure,
    ServiceUnavailable,
    Internal,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    InvalidTimeRange(String),

    /// The rejected candidate travels with the error so callers can show it
    #[error("{message}")]
    SchedulingConflict { message: String, event: Box<Event> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("{0}")]
    Gateway(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::Validation(_) => FailureKind::InvalidInput,
            AppError::InvalidTimeRange(_) => FailureKind::InvalidTimeRange,
            AppError::SchedulingConflict { .. } => FailureKind::SchedulingConflict,
            AppError::NotFound(_) => FailureKind::NotFound,
            AppError::Database(_) | AppError::Repository(_) => FailureKind::RepositoryFailure,
            AppError::Gateway(_) => FailureKind::ServiceUnavailable,
            AppError::Internal(_) => FailureKind::Internal,
        }
    }

    /// Event attached to the failure, if any
    pub fn event(&self) -> Option<&Event> {
        match self {
            AppError::SchedulingConflict { event, .. } => Some(event),
            _ => None,
        }
    }

    /// Message suitable for display; storage faults stay opaque
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::InvalidTimeRange(msg)
            | AppError::NotFound(msg)
            | AppError::Gateway(msg) => msg.clone(),
            AppError::SchedulingConflict { message, .. } => message.clone(),
            AppError::Database(_) | AppError::Repository(_) => "Storage failure".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub kind: FailureKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTimeRange(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SchedulingConflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Repository(msg) => {
                tracing::error!("Repository error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Gateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            kind: self.kind(),
            message: self.user_message(),
            event: self.event().cloned(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
