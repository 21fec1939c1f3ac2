//! Repository for the `messages` table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::message::Message;

const COLUMNS: &str = "id, sender_id, receiver_id, message, sent_at";

pub struct MessageRepo;

impl MessageRepo {
    pub async fn create<'e, E>(
        executor: E,
        sender_id: DbId,
        receiver_id: DbId,
        message: &str,
    ) -> Result<Message, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO messages (sender_id, receiver_id, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(sender_id)
            .bind(receiver_id)
            .bind(message)
            .fetch_one(executor)
            .await
    }

    /// The last `limit` messages exchanged between two users, oldest first.
    pub async fn conversation(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
        limit: i64,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM (
                 SELECT {COLUMNS} FROM messages
                 WHERE (sender_id = $1 AND receiver_id = $2)
                    OR (sender_id = $2 AND receiver_id = $1)
                 ORDER BY sent_at DESC, id DESC
                 LIMIT $3
             ) latest
             ORDER BY sent_at ASC, id ASC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(user_a)
            .bind(user_b)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
