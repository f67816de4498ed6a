use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common_auth::BearerStatus;
use thiserror::Error;

use crate::models::{RctfResponse, KIND_BAD_USER_DATA, MESSAGE_INVALID_AUTH};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid auth: bearer token is {status}")]
    InvalidAuth { status: BearerStatus },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidAuth { .. } => (
                StatusCode::FORBIDDEN,
                Json(RctfResponse::bad(KIND_BAD_USER_DATA, MESSAGE_INVALID_AUTH)),
            )
                .into_response(),
        }
    }
}
