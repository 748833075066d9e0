use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// Only two error kinds are ever visible on the wire: a failed bearer check
// (401) and an internal failure (500). Startup config errors never reach here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid authentication token")]
    InvalidToken,

    #[error("Error executing hello task: {0}")]
    Hello(String),

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Hello(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponseBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
