//! Repository for the `reminders` table.

use sqlx::PgPool;
use glyco_core::types::DbId;

use crate::models::reminder::{Reminder, ReminderFields};

const COLUMNS: &str = "id, user_id, title, reminder_type, remind_at, frequency, created_at";

pub struct ReminderRepo;

impl ReminderRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &ReminderFields,
    ) -> Result<Reminder, sqlx::Error> {
        let query = format!(
            "INSERT INTO reminders (user_id, title, reminder_type, remind_at, frequency)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.reminder_type)
            .bind(input.remind_at)
            .bind(&input.frequency)
            .fetch_one(pool)
            .await
    }

    /// Replace all editable fields. Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ReminderFields,
    ) -> Result<Option<Reminder>, sqlx::Error> {
        let query = format!(
            "UPDATE reminders
             SET title = $2, reminder_type = $3, remind_at = $4, frequency = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.reminder_type)
            .bind(input.remind_at)
            .bind(&input.frequency)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All reminders for a user, earliest time of day first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminders WHERE user_id = $1 ORDER BY remind_at, id"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
