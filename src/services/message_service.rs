use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::models::{clamp_limit, Message, NewMessage, MAX_MESSAGE_CHARS};
use crate::services::{normalize_text, ChatService};
use crate::store::MessageRepository;

/// Message-level rules; parent chat checks go through `ChatService`
#[derive(Clone)]
pub struct MessageService {
    messages: Arc<dyn MessageRepository>,
    chats: ChatService,
}

impl MessageService {
    pub fn new(messages: Arc<dyn MessageRepository>, chats: ChatService) -> Self {
        Self { messages, chats }
    }

    /// Append a message to an existing chat.
    ///
    /// A missing chat is reported as `Error::NotFound` whatever the text;
    /// invalid text never reaches `MessageRepository::create`.
    pub async fn create_message(&self, chat_id: i64, text: &str) -> Result<Message> {
        self.chats.validate_chat_exists(chat_id).await?;

        let text = normalize_text("text", text, MAX_MESSAGE_CHARS)?;

        let message = self.messages.create(NewMessage { chat_id, text }).await?;
        debug!(chat_id, message_id = message.id, "Created message");
        Ok(message)
    }

    /// Most recent messages of an existing chat, newest first.
    pub async fn list_messages(&self, chat_id: i64, limit: i64) -> Result<Vec<Message>> {
        self.chats.validate_chat_exists(chat_id).await?;
        self.messages.list_by_chat(chat_id, clamp_limit(limit)).await
    }
}
