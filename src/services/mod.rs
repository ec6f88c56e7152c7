//! Domain services: validation in front of the chat store

pub mod chat_service;
pub mod message_service;

pub use chat_service::ChatService;
pub use message_service::MessageService;

use crate::error::{Error, Result};

/// Trim `input` and check it is non-empty and at most `max_chars` characters.
pub(crate) fn normalize_text(field: &str, input: &str, max_chars: usize) -> Result<String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{} cannot be empty", field)));
    }

    if trimmed.chars().count() > max_chars {
        return Err(Error::InvalidInput(format!(
            "{} must be {} characters or less",
            field, max_chars
        )));
    }

    Ok(trimmed.to_string())
}
