//! Repository for the `articles` table.

use sqlx::PgPool;
use glyco_core::types::DbId;

use crate::models::article::ArticleWithAuthor;

pub struct ArticleRepo;

impl ArticleRepo {
    /// Publish an article, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        doctor_id: DbId,
        title: &str,
        content: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO articles (doctor_id, title, content)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(doctor_id)
        .bind(title)
        .bind(content)
        .fetch_one(pool)
        .await
    }

    /// All articles, newest first, with the author's name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ArticleWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, ArticleWithAuthor>(
            "SELECT a.id, a.doctor_id, a.title, a.content, a.published_at,
                    u.name AS doctor_name
             FROM articles a
             JOIN users u ON u.id = a.doctor_id
             ORDER BY a.published_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
