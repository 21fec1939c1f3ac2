//! Repository for the `specialties` lookup table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::doctor::Specialty;

pub struct SpecialtyRepo;

impl SpecialtyRepo {
    /// List all specialties ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Specialty>, sqlx::Error> {
        sqlx::query_as::<_, Specialty>("SELECT id, name FROM specialties ORDER BY name")
            .fetch_all(pool)
            .await
    }

    pub async fn exists<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM specialties WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }
}
