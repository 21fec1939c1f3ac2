//! Repository for the `doctors` table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::doctor::{DoctorProfile, DoctorProfileFields, DoctorSummary};

/// Select list for directory entries; expects `users u`, `doctors d`, `specialties s`.
pub(crate) const SUMMARY_COLUMNS: &str =
    "u.id, u.name, u.email, d.specialty_id, s.name AS specialty, d.clinic, d.city, d.country";

/// Provides profile operations for doctors.
pub struct DoctorRepo;

impl DoctorRepo {
    /// Create the profile row for a freshly registered doctor.
    pub async fn create<'e, E>(
        executor: E,
        user_id: DbId,
        input: &DoctorProfileFields,
    ) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            "INSERT INTO doctors (user_id, phone, specialty_id, clinic, geo_lat, geo_lng,
                                  city, country, license_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(user_id)
        .bind(&input.phone)
        .bind(input.specialty_id)
        .bind(&input.clinic)
        .bind(input.geo_lat)
        .bind(input.geo_lng)
        .bind(&input.city)
        .bind(&input.country)
        .bind(&input.license_number)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Fetch a doctor joined with their user row and specialty name.
    pub async fn find_profile(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<DoctorProfile>, sqlx::Error> {
        sqlx::query_as::<_, DoctorProfile>(
            "SELECT u.id, u.name, u.email, s.name AS specialty,
                    d.phone, d.specialty_id, d.clinic, d.geo_lat, d.geo_lng,
                    d.city, d.country, d.license_number
             FROM users u
             JOIN doctors d ON d.user_id = u.id
             LEFT JOIN specialties s ON s.id = d.specialty_id
             WHERE u.id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Overwrite every profile field.
    ///
    /// Returns `false` if the user has no doctor profile.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &DoctorProfileFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE doctors SET
                phone = $2, specialty_id = $3, clinic = $4, geo_lat = $5, geo_lng = $6,
                city = $7, country = $8, license_number = $9
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(&input.phone)
        .bind(input.specialty_id)
        .bind(&input.clinic)
        .bind(input.geo_lat)
        .bind(input.geo_lng)
        .bind(&input.city)
        .bind(&input.country)
        .bind(&input.license_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every doctor with their specialty.
    pub async fn list(pool: &PgPool) -> Result<Vec<DoctorSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM users u
             JOIN doctors d ON d.user_id = u.id
             LEFT JOIN specialties s ON s.id = d.specialty_id
             ORDER BY u.name"
        );
        sqlx::query_as::<_, DoctorSummary>(&query)
            .fetch_all(pool)
            .await
    }
}
