// Route definitions

use std::collections::HashMap;
use std::convert::Infallible;

use warp::Filter;

use crate::handlers::{self, AppState};

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn limit_query() -> impl Filter<Extract = (HashMap<String, String>,), Error = warp::Rejection> + Clone {
    warp::query::<HashMap<String, String>>()
}

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let chats = warp::path("api").and(warp::path("chats"));

    // POST /api/chats
    let create_chat = chats
        .clone()
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(handlers::create_chat_handler);

    // GET /api/chats/{id}
    let get_chat = chats
        .clone()
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(limit_query())
        .and(with_state(state.clone()))
        .and_then(handlers::get_chat_handler);

    // DELETE /api/chats/{id}
    let delete_chat = chats
        .clone()
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_state(state.clone()))
        .and_then(handlers::delete_chat_handler);

    // POST /api/chats/{id}/messages
    let create_message = chats
        .clone()
        .and(warp::path::param::<String>())
        .and(warp::path("messages"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(handlers::create_message_handler);

    // GET /api/chats/{id}/messages
    let list_messages = chats
        .and(warp::path::param::<String>())
        .and(warp::path("messages"))
        .and(warp::path::end())
        .and(warp::get())
        .and(limit_query())
        .and(with_state(state))
        .and_then(handlers::list_messages_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    // Combine routes
    create_chat
        .or(get_chat)
        .or(delete_chat)
        .or(create_message)
        .or(list_messages)
        .or(health)
        .recover(handlers::handle_body_rejection)
}
