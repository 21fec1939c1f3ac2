//! Repository for the `challenges` and `challenge_participants` tables.

use sqlx::PgPool;
use glyco_core::types::DbId;

use crate::models::challenge::{ChallengeWithCreator, CreateChallenge};

/// Select list joined with the creator; expects `challenges c`, `users u`.
const COLUMNS: &str = "c.id, c.creator_id, c.title, c.description, c.start_date, c.end_date, \
                       c.created_at, u.name AS creator_name";

pub struct ChallengeRepo;

impl ChallengeRepo {
    pub async fn create(pool: &PgPool, input: &CreateChallenge) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO challenges (creator_id, title, description, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(input.creator_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(pool)
        .await
    }

    /// Add a participant. Joining twice is a no-op.
    ///
    /// Returns `true` if the user was not already a participant.
    pub async fn join(pool: &PgPool, challenge_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO challenge_participants (challenge_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (challenge_id, user_id) DO NOTHING",
        )
        .bind(challenge_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `true` if the user was a participant.
    pub async fn leave(pool: &PgPool, challenge_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM challenge_participants WHERE challenge_id = $1 AND user_id = $2",
        )
        .bind(challenge_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All challenges, latest start date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ChallengeWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM challenges c
             JOIN users u ON u.id = c.creator_id
             ORDER BY c.start_date DESC, c.id DESC"
        );
        sqlx::query_as::<_, ChallengeWithCreator>(&query)
            .fetch_all(pool)
            .await
    }

    /// Challenges the user has joined, latest start date first.
    pub async fn list_joined(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ChallengeWithCreator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM challenge_participants cp
             JOIN challenges c ON c.id = cp.challenge_id
             JOIN users u ON u.id = c.creator_id
             WHERE cp.user_id = $1
             ORDER BY c.start_date DESC, c.id DESC"
        );
        sqlx::query_as::<_, ChallengeWithCreator>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
