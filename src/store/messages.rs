use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::error::Result;
use crate::models::{Message, NewMessage};
use crate::store::repository::MessageRepository;

/// Postgres-backed `MessageRepository`
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: Pool,
}

impl PgMessageRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

pub(crate) fn message_from_row(row: &Row) -> Result<Message> {
    Ok(Message {
        id: row.try_get("id")?,
        chat_id: row.try_get("chat_id")?,
        text: row.try_get("text")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, message: NewMessage) -> Result<Message> {
        let conn = self.pool.get().await?;

        // A missing chat surfaces as a foreign key violation -> Error::Storage
        let row = conn
            .query_one(
                "INSERT INTO messages (chat_id, text) VALUES ($1, $2) \
                 RETURNING id, chat_id, text, created_at",
                &[&message.chat_id, &message.text],
            )
            .await?;

        message_from_row(&row)
    }

    async fn list_by_chat(&self, chat_id: i64, limit: i64) -> Result<Vec<Message>> {
        let conn = self.pool.get().await?;

        let rows = conn
            .query(
                "SELECT id, chat_id, text, created_at FROM messages \
                 WHERE chat_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2",
                &[&chat_id, &limit],
            )
            .await?;

        rows.iter().map(message_from_row).collect()
    }
}
