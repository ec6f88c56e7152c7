// JSON reply helpers

use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::error::Error;

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn json_reply<T: Serialize>(value: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(value), status).into_response()
}

/// Build an error response. Server errors never expose the underlying error.
pub fn error_reply(status: StatusCode, message: &str, err: Option<&Error>) -> Response {
    let error = if status.is_server_error() {
        None
    } else {
        err.map(|e| e.to_string())
    };

    let body = ErrorBody {
        status: status.as_u16(),
        message: message.to_string(),
        error,
    };

    json_reply(&body, status)
}

pub fn internal_error() -> Response {
    error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
}
