//! Repository for the append-only `glucose_logs` table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::glucose::{CreateGlucoseLog, GlucoseLog};

const COLUMNS: &str = "id, user_id, glucose_level, context, category, recorded_at";

/// Provides insert and read operations for glucose readings. There is no
/// update or delete.
pub struct GlucoseLogRepo;

impl GlucoseLogRepo {
    /// Persist a classified reading, returning the created row.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateGlucoseLog,
    ) -> Result<GlucoseLog, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO glucose_logs (user_id, glucose_level, context, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GlucoseLog>(&query)
            .bind(input.user_id)
            .bind(input.glucose_level)
            .bind(&input.context)
            .bind(&input.category)
            .fetch_one(executor)
            .await
    }

    /// Most recent readings first.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<GlucoseLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM glucose_logs
             WHERE user_id = $1
             ORDER BY recorded_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, GlucoseLog>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Oldest readings first, for charting.
    pub async fn list_chronological(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<GlucoseLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM glucose_logs
             WHERE user_id = $1
             ORDER BY recorded_at ASC, id ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, GlucoseLog>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Number of readings logged during the current UTC day.
    pub async fn count_today(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM glucose_logs
             WHERE user_id = $1
               AND (recorded_at AT TIME ZONE 'UTC')::date = (NOW() AT TIME ZONE 'UTC')::date",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
