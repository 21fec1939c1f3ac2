//! Repository for the `physical_activities` table.

use sqlx::PgPool;
use glyco_core::types::DbId;

use crate::models::activity::{Activity, CreateActivity};

const COLUMNS: &str =
    "id, user_id, activity_type, duration_minutes, calories_burned, notes, recorded_at";

pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO physical_activities (user_id, activity_type, duration_minutes,
                                              calories_burned, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.user_id)
            .bind(&input.activity_type)
            .bind(input.duration_minutes)
            .bind(input.calories_burned)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Most recent activities first.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM physical_activities
             WHERE user_id = $1
             ORDER BY recorded_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM physical_activities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
