//! Repository for the `patients` table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::patient::{PatientProfile, PatientProfileFields, PatientSummary};

/// Profile columns, prefixed for joins against `users u`.
const PROFILE_COLUMNS: &str = "p.phone, p.dob, p.gender, p.city, p.country, p.diabetes_type, \
                               p.health_background, p.emergency_contact_name, \
                               p.emergency_contact_phone, p.weight_kg, p.hydration_liters";

/// Provides profile operations for patients.
pub struct PatientRepo;

impl PatientRepo {
    /// Create the profile row for a freshly registered patient.
    pub async fn create<'e, E>(
        executor: E,
        user_id: DbId,
        input: &PatientProfileFields,
    ) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            "INSERT INTO patients (user_id, phone, dob, gender, city, country, diabetes_type,
                                   health_background, emergency_contact_name,
                                   emergency_contact_phone, weight_kg, hydration_liters)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(user_id)
        .bind(&input.phone)
        .bind(input.dob)
        .bind(&input.gender)
        .bind(&input.city)
        .bind(&input.country)
        .bind(&input.diabetes_type)
        .bind(&input.health_background)
        .bind(&input.emergency_contact_name)
        .bind(&input.emergency_contact_phone)
        .bind(input.weight_kg)
        .bind(input.hydration_liters)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Fetch a patient joined with their user row.
    pub async fn find_profile(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<PatientProfile>, sqlx::Error> {
        let query = format!(
            "SELECT u.id, u.name, u.email, {PROFILE_COLUMNS}
             FROM users u
             JOIN patients p ON p.user_id = u.id
             WHERE u.id = $1"
        );
        sqlx::query_as::<_, PatientProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every profile field.
    ///
    /// Returns `false` if the user has no patient profile.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &PatientProfileFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE patients SET
                phone = $2, dob = $3, gender = $4, city = $5, country = $6,
                diabetes_type = $7, health_background = $8,
                emergency_contact_name = $9, emergency_contact_phone = $10,
                weight_kg = $11, hydration_liters = $12
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(&input.phone)
        .bind(input.dob)
        .bind(&input.gender)
        .bind(&input.city)
        .bind(&input.country)
        .bind(&input.diabetes_type)
        .bind(&input.health_background)
        .bind(&input.emergency_contact_name)
        .bind(&input.emergency_contact_phone)
        .bind(input.weight_kg)
        .bind(input.hydration_liters)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Look up the diabetes type recorded on the patient's profile.
    ///
    /// The outer `Option` is `None` when no profile exists; the inner one is
    /// `None` when the profile has no type set.
    pub async fn find_diabetes_type<'e, E>(
        executor: E,
        user_id: DbId,
    ) -> Result<Option<Option<String>>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT diabetes_type FROM patients WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(executor)
            .await
    }

    /// List the patients assigned to a doctor.
    pub async fn list_for_doctor(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Vec<PatientSummary>, sqlx::Error> {
        sqlx::query_as::<_, PatientSummary>(
            "SELECT u.id, u.name, u.email, p.city, p.country, p.diabetes_type
             FROM doctor_patient dp
             JOIN users u ON u.id = dp.patient_id
             LEFT JOIN patients p ON p.user_id = u.id
             WHERE dp.doctor_id = $1
             ORDER BY u.name",
        )
        .bind(doctor_id)
        .fetch_all(pool)
        .await
    }
}
