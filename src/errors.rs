//! Error handling for the REST API.
//!
//! Two layers:
//! - [`StoreError`] classifies database failures into the kinds callers need
//!   to distinguish: duplicate keys, other constraint violations, lost
//!   connectivity and row-decoding type mismatches. "No such row" is never an
//!   error anywhere in this crate; reads return `Option`/empty collections
//!   and updates report an affected-row count.
//! - [`ApiError`] maps those kinds (plus request-validation failures) onto
//!   HTTP responses. Internal details are logged via `tracing` and never
//!   serialized to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use std::fmt;

/// Failure kinds surfaced by the repositories.
///
/// Connectivity failures are fatal to the request; nothing in this crate
/// retries them.
#[derive(Debug)]
pub enum StoreError {
    /// An insert collided with an existing key (pre-assigned id, unique
    /// column).
    DuplicateKey(String),
    /// A foreign-key or uniqueness constraint rejected the write.
    ConstraintViolation(String),
    /// The store is unreachable or the connection was lost.
    Connectivity(DbErr),
    /// A stored value could not be coerced to the declared field type.
    TypeMismatch(DbErr),
    /// Anything else the driver reported.
    Other(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        if let Some(sql_err) = err.sql_err() {
            return match sql_err {
                SqlErr::UniqueConstraintViolation(msg) => Self::DuplicateKey(msg),
                SqlErr::ForeignKeyConstraintViolation(msg) => Self::ConstraintViolation(msg),
                _ => Self::Other(err),
            };
        }
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Connectivity(err),
            DbErr::Type(_) | DbErr::TryIntoErr { .. } => Self::TypeMismatch(err),
            _ => Self::Other(err),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(msg) => write!(f, "duplicate key: {msg}"),
            Self::ConstraintViolation(msg) => write!(f, "constraint violation: {msg}"),
            Self::Connectivity(err) => write!(f, "store unreachable: {err}"),
            Self::TypeMismatch(err) => write!(f, "column type mismatch: {err}"),
            Self::Other(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// API error type with sanitized responses.
///
/// Status mapping: missing rows are 404, duplicate keys and request
/// validation failures are 400, everything else is 500.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found.
    NotFound {
        resource: &'static str,
        id: Option<i64>,
    },

    /// 400 Bad Request - invalid input, id mismatches, duplicate keys.
    BadRequest { message: String },

    /// 500 Internal Server Error - store failure (details logged, not
    /// exposed).
    Store {
        message: String,
        internal: StoreError,
    },
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: Option<i64>) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => match id {
                Some(id) => format!("{resource} with id '{id}' not found"),
                None => format!("{resource} not found"),
            },
            Self::BadRequest { message } => message.clone(),
            Self::Store { message, .. } => message.clone(),
        }
    }

    /// Log internal details; clients only ever see [`Self::user_message`].
    fn log_internal(&self) {
        match self {
            Self::Store { internal, .. } => {
                tracing::error!(error = ?internal, "store error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(_) => Self::BadRequest {
                message: "An entity with this key already exists".to_string(),
            },
            other => Self::Store {
                message: "A database error occurred".to_string(),
                internal: other,
            },
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        StoreError::from(err).into()
    }
}

/// Error response sent to clients.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();
        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
        };
        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}
