//! Error type shared by the store layer and the HTTP handlers.
//!
//! Errors are rendered as JSON bodies with a status code picked per variant.

use poem::error::ResponseError;
use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Request body did not have the expected shape (400)
    #[error("{0}")]
    Validation(String),

    /// Store unreachable or a statement failed (500, logged)
    #[error("store error: {0}")]
    Store(#[from] DbErr),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl ResponseError for Error {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response {
        let body = match self {
            Self::Validation(message) => ErrorBody {
                error: "validation_error",
                message: message.clone(),
            },
            Self::Store(e) => {
                // Log the actual error, return a generic message
                tracing::error!(error = %e, "store error");
                ErrorBody {
                    error: "internal_error",
                    message: "an internal error occurred".to_string(),
                }
            }
        };

        Json(body).with_status(self.status()).into_response()
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(e.to_string())
    }
}
