use axum::{http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CheckError {
    #[error("input is not a 40 character hexadecimal SHA-1 digest")]
    InvalidDigest,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CheckError {
    fn from(e: figment::Error) -> Self {
        CheckError::Config(Box::new(e))
    }
}

impl CheckError {
    pub fn status(&self) -> StatusCode {
        match self {
            CheckError::InvalidDigest => StatusCode::BAD_REQUEST,
            CheckError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            CheckError::Config(_) | CheckError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Lookup responses carry no body; the status code is the whole answer.
impl IntoResponse for CheckError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "lookup failed");
        }
        status.into_response()
    }
}
