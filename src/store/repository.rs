//! Storage seams used by the services
//!
//! The Postgres implementations live next to this module; tests substitute
//! in-memory fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Chat, Message, NewChat, NewMessage};

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Insert a chat; the store assigns its id and creation time.
    async fn create(&self, chat: NewChat) -> Result<Chat>;

    /// Fetch one chat. With `with_messages`, attach up to `limit` of its
    /// messages ordered by id, newest first.
    ///
    /// Fails with `Error::NotFound` when no chat has this id.
    async fn get_by_id(&self, id: i64, with_messages: bool, limit: i64) -> Result<Chat>;

    /// Delete a chat and, by cascade, its messages.
    ///
    /// Fails with `Error::NotFound` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<()>;

    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message under `message.chat_id`.
    async fn create(&self, message: NewMessage) -> Result<Message>;

    /// Up to `limit` messages of a chat, newest first by creation time.
    async fn list_by_chat(&self, chat_id: i64, limit: i64) -> Result<Vec<Message>>;
}
