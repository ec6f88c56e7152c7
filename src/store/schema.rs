//! Table definitions for the chat store
//!
//! The statements are idempotent, so running them on every startup is safe.

use deadpool_postgres::Pool;
use tracing::info;

use crate::error::Result;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS chats (
    id          BIGSERIAL PRIMARY KEY,
    title       TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS messages (
    id          BIGSERIAL PRIMARY KEY,
    chat_id     BIGINT NOT NULL REFERENCES chats(id) ON DELETE CASCADE,
    text        TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS messages_chat_id_id_idx ON messages (chat_id, id DESC);
"#;

/// Create the `chats` and `messages` tables if they are missing
pub async fn migrate(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(SCHEMA).await?;
    info!("Chat store schema is up to date");
    Ok(())
}
