use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use scheduler_core::error::CoreError;

use super::types::ErrorResponse;

/// A [`CoreError`] on its way out of a JSON endpoint.
///
/// Input problems become `400 Bad Request`, store failures become
/// `500 Internal Server Error`; either way the body is `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(&self.0)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub(crate) fn status_for(err: &CoreError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
