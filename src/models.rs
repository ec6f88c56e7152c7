//! Data structures (Chat, Message, request payloads)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Messages returned with a chat when no limit is given
pub const DEFAULT_LIMIT: i64 = 20;
/// Upper bound on any requested message limit
pub const MAX_LIMIT: i64 = 100;
/// Longest accepted chat title, in characters, after trimming
pub const MAX_TITLE_CHARS: usize = 200;
/// Longest accepted message text, in characters, after trimming
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// A conversation and, when loaded with them, its most recent messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Newest first; empty unless the chat was loaded with its messages
    #[serde(rename = "message", default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

/// A single text entry belonging to one chat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A chat that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewChat {
    pub title: String,
}

/// A message that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Body of `POST /api/chats`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatRequest {
    pub title: String,
}

/// Body of `POST /api/chats/{id}/messages`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    pub text: String,
}

/// Clamp a requested message limit: non-positive falls back to the default,
/// anything above the maximum is capped.
pub fn clamp_limit(limit: i64) -> i64 {
    if limit <= 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
