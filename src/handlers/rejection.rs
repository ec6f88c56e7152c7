// Rejections raised by the body filters before a handler runs

use tracing::warn;
use warp::http::StatusCode;
use warp::reject::{LengthRequired, PayloadTooLarge};
use warp::reply::Response;
use warp::Rejection;

use crate::handlers::reply::error_reply;
use crate::routes::MAX_BODY_BYTES;

/// Report a missing or oversized request body as 400. Any other rejection
/// is passed on to warp's default 404/405 handling.
pub async fn handle_body_rejection(err: Rejection) -> Result<Response, Rejection> {
    if err.find::<LengthRequired>().is_some() {
        warn!("request body without Content-Length");
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            "Request body with Content-Length required",
            None,
        ));
    }

    if err.find::<PayloadTooLarge>().is_some() {
        warn!(limit = MAX_BODY_BYTES, "request body too large");
        let message = format!("Request body must be {} bytes or less", MAX_BODY_BYTES);
        return Ok(error_reply(StatusCode::BAD_REQUEST, &message, None));
    }

    Err(err)
}
