// /api/chats/{id}/messages handlers

use std::collections::HashMap;
use std::convert::Infallible;

use bytes::Bytes;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::reply::Response;

use crate::error::Error;
use crate::handlers::params::{decode_json, parse_chat_id, parse_limit};
use crate::handlers::reply::{error_reply, internal_error, json_reply};
use crate::handlers::AppState;
use crate::models::{CreateMessageRequest, MAX_MESSAGE_CHARS};

fn message_error_reply(chat_id: i64, err: Error) -> Response {
    match err {
        Error::NotFound(_) => {
            warn!(chat_id, error = %err, "chat not found");
            error_reply(StatusCode::NOT_FOUND, "Chat not found", Some(&err))
        }
        Error::InvalidInput(_) => {
            warn!(chat_id, error = %err, "invalid input");
            error_reply(StatusCode::BAD_REQUEST, "Invalid input", Some(&err))
        }
        _ => {
            error!(chat_id, error = %err, "message request failed");
            internal_error()
        }
    }
}

/// POST /api/chats/{id}/messages
pub async fn create_message_handler(
    raw_id: String,
    state: AppState,
    body: Bytes,
) -> Result<Response, Infallible> {
    let chat_id = match parse_chat_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "POST /api/chats/{}/messages: bad request", raw_id);
            return Ok(error_reply(StatusCode::BAD_REQUEST, "Invalid chat ID", Some(&err)));
        }
    };

    let request: CreateMessageRequest = match decode_json(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(chat_id, error = %err, "POST /api/chats/{}/messages: bad request", chat_id);
            return Ok(error_reply(StatusCode::BAD_REQUEST, "Invalid JSON", Some(&err)));
        }
    };

    let text = request.text.trim();
    if text.is_empty() {
        warn!(chat_id, "POST /api/chats/{}/messages: empty text", chat_id);
        return Ok(error_reply(StatusCode::BAD_REQUEST, "Text cannot be empty", None));
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        warn!(chat_id, "POST /api/chats/{}/messages: text too long", chat_id);
        let message = format!("Text must be {} characters or less", MAX_MESSAGE_CHARS);
        return Ok(error_reply(StatusCode::BAD_REQUEST, &message, None));
    }

    match state.messages.create_message(chat_id, text).await {
        Ok(message) => {
            info!(chat_id, message_id = message.id, "POST /api/chats/{}/messages: created", chat_id);
            Ok(json_reply(&message, StatusCode::CREATED))
        }
        Err(err) => Ok(message_error_reply(chat_id, err)),
    }
}

/// GET /api/chats/{id}/messages?limit=N
pub async fn list_messages_handler(
    raw_id: String,
    query: HashMap<String, String>,
    state: AppState,
) -> Result<Response, Infallible> {
    let chat_id = match parse_chat_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "GET /api/chats/{}/messages: bad request", raw_id);
            return Ok(error_reply(StatusCode::BAD_REQUEST, "Invalid chat ID", Some(&err)));
        }
    };
    let limit = parse_limit(&query);

    match state.messages.list_messages(chat_id, limit).await {
        Ok(messages) => Ok(json_reply(&messages, StatusCode::OK)),
        Err(err) => Ok(message_error_reply(chat_id, err)),
    }
}
