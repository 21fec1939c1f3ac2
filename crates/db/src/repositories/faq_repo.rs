//! Repository for the `faqs` table.

use sqlx::PgPool;
use glyco_core::types::DbId;

use crate::models::faq::FaqEntry;

pub struct FaqRepo;

impl FaqRepo {
    /// Ask a question, optionally answered up front. Returns the generated ID.
    pub async fn create(
        pool: &PgPool,
        question: &str,
        answer: Option<&str>,
        doctor_id: Option<DbId>,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO faqs (question, answer, doctor_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(question)
        .bind(answer)
        .bind(doctor_id)
        .fetch_one(pool)
        .await
    }

    /// Record a doctor's answer. Returns `false` if the FAQ does not exist.
    pub async fn answer(
        pool: &PgPool,
        id: DbId,
        answer: &str,
        doctor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE faqs SET answer = $2, doctor_id = $3 WHERE id = $1")
            .bind(id)
            .bind(answer)
            .bind(doctor_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All FAQs, newest first. Unanswered entries have no doctor name.
    pub async fn list(pool: &PgPool) -> Result<Vec<FaqEntry>, sqlx::Error> {
        sqlx::query_as::<_, FaqEntry>(
            "SELECT f.id, f.question, f.answer, f.doctor_id, f.created_at,
                    u.name AS doctor_name
             FROM faqs f
             LEFT JOIN users u ON u.id = f.doctor_id
             ORDER BY f.created_at DESC, f.id DESC",
        )
        .fetch_all(pool)
        .await
    }
}
