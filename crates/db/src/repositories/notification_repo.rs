//! Repository for the `notifications` table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::notifications::NotificationDraft;
use glyco_core::types::DbId;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, user_id, kind, title, body, is_read, created_at";

/// Provides insert and read operations for the notification feed.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Persist a draft, returning the generated ID.
    pub async fn create<'e, E>(executor: E, draft: &NotificationDraft) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar(
            "INSERT INTO notifications (user_id, kind, title, body) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(draft.user_id)
        .bind(draft.kind.as_str())
        .bind(&draft.title)
        .bind(&draft.body)
        .fetch_one(executor)
        .await
    }

    /// Most recent notifications for a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Mark all unread notifications as read for a user.
    ///
    /// Returns the number of notifications that were marked read.
    pub async fn mark_all_read(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
