// Handlers module

pub mod chats;
pub mod health;
pub mod messages;
pub mod params;
pub mod rejection;
pub mod reply;

use std::sync::Arc;

use crate::services::{ChatService, MessageService};
use crate::store::{ChatRepository, MessageRepository};

pub use chats::{create_chat_handler, delete_chat_handler, get_chat_handler};
pub use health::health_handler;
pub use messages::{create_message_handler, list_messages_handler};
pub use rejection::handle_body_rejection;

/// Services shared by every request
#[derive(Clone)]
pub struct AppState {
    pub chats: ChatService,
    pub messages: MessageService,
}

impl AppState {
    /// Wire the services on top of the given repositories
    pub fn new(chats: Arc<dyn ChatRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        let chats = ChatService::new(chats);
        let messages = MessageService::new(messages, chats.clone());
        Self { chats, messages }
    }
}
