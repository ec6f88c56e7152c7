// /api/chats handlers

use std::collections::HashMap;
use std::convert::Infallible;

use bytes::Bytes;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::error::Error;
use crate::handlers::params::{decode_json, parse_chat_id, parse_limit};
use crate::handlers::reply::{error_reply, internal_error, json_reply};
use crate::handlers::AppState;
use crate::models::CreateChatRequest;

/// POST /api/chats
pub async fn create_chat_handler(state: AppState, body: Bytes) -> Result<Response, Infallible> {
    let request: CreateChatRequest = match decode_json(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "POST /api/chats: bad request");
            return Ok(error_reply(StatusCode::BAD_REQUEST, "Invalid JSON", Some(&err)));
        }
    };

    match state.chats.create_chat(&request.title).await {
        Ok(chat) => {
            info!(chat_id = chat.id, "POST /api/chats: created");
            Ok(json_reply(&chat, StatusCode::CREATED))
        }
        Err(err @ Error::InvalidInput(_)) => {
            warn!(error = %err, "POST /api/chats: invalid title");
            Ok(error_reply(StatusCode::BAD_REQUEST, "Invalid title", Some(&err)))
        }
        Err(err @ Error::AlreadyExists(_)) => {
            warn!(error = %err, "POST /api/chats: conflict");
            Ok(error_reply(StatusCode::CONFLICT, "Chat already exists", Some(&err)))
        }
        Err(err) => {
            error!(error = %err, "POST /api/chats: failed");
            Ok(internal_error())
        }
    }
}

/// GET /api/chats/{id}?limit=N
///
/// Every failure to load the chat is reported as 404.
pub async fn get_chat_handler(
    raw_id: String,
    query: HashMap<String, String>,
    state: AppState,
) -> Result<Response, Infallible> {
    let id = match parse_chat_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "GET /api/chats/{}: bad request", raw_id);
            return Ok(error_reply(StatusCode::BAD_REQUEST, "Bad request", Some(&err)));
        }
    };
    let limit = parse_limit(&query);

    match state.chats.get_chat(id, limit).await {
        Ok(chat) => Ok(json_reply(&chat, StatusCode::OK)),
        Err(err @ Error::NotFound(_)) => {
            warn!(chat_id = id, "GET /api/chats/{}: not found", id);
            Ok(error_reply(StatusCode::NOT_FOUND, "Not found", Some(&err)))
        }
        Err(err) => {
            error!(chat_id = id, error = %err, "GET /api/chats/{}: failed", id);
            Ok(error_reply(StatusCode::NOT_FOUND, "Not found", None))
        }
    }
}

/// DELETE /api/chats/{id}
pub async fn delete_chat_handler(raw_id: String, state: AppState) -> Result<Response, Infallible> {
    let id = match parse_chat_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "DELETE /api/chats/{}: bad request", raw_id);
            return Ok(error_reply(StatusCode::BAD_REQUEST, "Bad request", Some(&err)));
        }
    };

    match state.chats.delete_chat(id).await {
        Ok(()) => {
            info!(chat_id = id, "DELETE /api/chats/{}: deleted", id);
            Ok(warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT).into_response())
        }
        Err(err @ Error::NotFound(_)) => {
            warn!(chat_id = id, "DELETE /api/chats/{}: not found", id);
            Ok(error_reply(StatusCode::NOT_FOUND, "Not found", Some(&err)))
        }
        Err(err) => {
            error!(chat_id = id, error = %err, "DELETE /api/chats/{}: failed", id);
            Ok(internal_error())
        }
    }
}
