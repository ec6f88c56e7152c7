use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::error::{Error, Result};
use crate::models::{Chat, NewChat};
use crate::store::messages::message_from_row;
use crate::store::repository::ChatRepository;

/// Postgres-backed `ChatRepository`
#[derive(Clone)]
pub struct PgChatRepository {
    pool: Pool,
}

impl PgChatRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

fn chat_from_row(row: &Row) -> Result<Chat> {
    Ok(Chat {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        created_at: row.try_get("created_at")?,
        messages: Vec::new(),
    })
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn create(&self, chat: NewChat) -> Result<Chat> {
        let conn = self.pool.get().await?;

        let row = conn
            .query_one(
                "INSERT INTO chats (title) VALUES ($1) RETURNING id, title, created_at",
                &[&chat.title],
            )
            .await?;

        chat_from_row(&row)
    }

    async fn get_by_id(&self, id: i64, with_messages: bool, limit: i64) -> Result<Chat> {
        let mut conn = self.pool.get().await?;

        // Chat and its messages are read from the same snapshot
        let txn = conn.transaction().await?;

        let row = txn
            .query_opt("SELECT id, title, created_at FROM chats WHERE id = $1", &[&id])
            .await?
            .ok_or_else(|| Error::chat_not_found(id))?;
        let mut chat = chat_from_row(&row)?;

        if with_messages {
            let rows = txn
                .query(
                    "SELECT id, chat_id, text, created_at FROM messages \
                     WHERE chat_id = $1 ORDER BY id DESC LIMIT $2",
                    &[&id, &limit],
                )
                .await?;

            chat.messages = rows
                .iter()
                .map(message_from_row)
                .collect::<Result<Vec<_>>>()?;
        }

        txn.commit().await?;
        Ok(chat)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let conn = self.pool.get().await?;

        let deleted = conn
            .execute("DELETE FROM chats WHERE id = $1", &[&id])
            .await?;

        if deleted == 0 {
            return Err(Error::chat_not_found(id));
        }
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let conn = self.pool.get().await?;

        let row = conn
            .query_one("SELECT EXISTS (SELECT 1 FROM chats WHERE id = $1)", &[&id])
            .await?;

        Ok(row.try_get(0)?)
    }
}
