//! HTTP mapping of the actors' errors.
//!
//! Domain failures answer `400 Bad Request` with the error's message as plain text;
//! a broken actor answers `500`.

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

fn respond(status: StatusCode, message: String) -> Response {
    if status.is_server_error() {
        error!(%message, "Request failed");
    }
    (status, message).into_response()
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            OrderError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        respond(status, self.to_string())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProductError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        respond(status, self.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        respond(status, self.to_string())
    }
}
