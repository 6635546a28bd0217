//! Error types for the library API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main application error type
///
/// Every variant renders as a short plain-text body. Store causes are logged
/// and never sent to the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup, update or delete by id matched zero rows
    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by the store, including constraint violations
    #[error("{message}: {source}")]
    Store {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("{0}")]
    Unavailable(String),
}

impl AppError {
    pub fn store(message: impl Into<String>, source: sqlx::Error) -> Self {
        AppError::Store {
            message: message.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::NotFound(msg) | AppError::Unavailable(msg) => msg,
            AppError::Store { message, source } => {
                // Constraint violations and connectivity loss share the 500,
                // the log keeps them apart
                match source.as_database_error() {
                    Some(db) => {
                        let code = db.code().map(|c| c.into_owned()).unwrap_or_default();
                        let constraint = db.constraint().unwrap_or_default();
                        tracing::error!(
                            code = %code,
                            constraint = %constraint,
                            "{}: {}",
                            message,
                            db.message()
                        );
                    }
                    None => tracing::error!("{}: {:?}", message, source),
                }
                message
            }
        };

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
