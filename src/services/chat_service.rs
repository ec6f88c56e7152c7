use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{clamp_limit, Chat, NewChat, MAX_TITLE_CHARS};
use crate::services::normalize_text;
use crate::store::ChatRepository;

/// Chat-level rules on top of a `ChatRepository`
#[derive(Clone)]
pub struct ChatService {
    chats: Arc<dyn ChatRepository>,
}

impl ChatService {
    pub fn new(chats: Arc<dyn ChatRepository>) -> Self {
        Self { chats }
    }

    /// Create a chat with a trimmed, non-empty title of at most
    /// `MAX_TITLE_CHARS` characters.
    pub async fn create_chat(&self, title: &str) -> Result<Chat> {
        let title = normalize_text("title", title, MAX_TITLE_CHARS)?;

        let chat = self.chats.create(NewChat { title }).await?;
        debug!(chat_id = chat.id, "Created chat");
        Ok(chat)
    }

    /// Fetch a chat with its most recent messages. `limit` is clamped to
    /// `1..=MAX_LIMIT`, non-positive values mean `DEFAULT_LIMIT`.
    pub async fn get_chat(&self, id: i64, limit: i64) -> Result<Chat> {
        self.chats.get_by_id(id, true, clamp_limit(limit)).await
    }

    pub async fn delete_chat(&self, id: i64) -> Result<()> {
        self.chats.delete(id).await?;
        debug!(chat_id = id, "Deleted chat");
        Ok(())
    }

    /// Succeeds only if the chat exists; `Error::NotFound` otherwise.
    pub async fn validate_chat_exists(&self, id: i64) -> Result<()> {
        if self.chats.exists(id).await? {
            Ok(())
        } else {
            Err(Error::chat_not_found(id))
        }
    }
}
