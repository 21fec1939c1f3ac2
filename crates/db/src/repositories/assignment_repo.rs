//! Repository for the `doctor_patient` assignment table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::doctor::{Assignment, DoctorSummary};
use crate::repositories::doctor_repo::SUMMARY_COLUMNS;

/// Provides doctor/patient assignment operations.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Assign `doctor_id` to `patient_id`, replacing any previous doctor.
    pub async fn assign(
        pool: &PgPool,
        doctor_id: DbId,
        patient_id: DbId,
    ) -> Result<Assignment, sqlx::Error> {
        sqlx::query_as::<_, Assignment>(
            "INSERT INTO doctor_patient (doctor_id, patient_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_doctor_patient_patient_id
             DO UPDATE SET doctor_id = EXCLUDED.doctor_id, assigned_at = NOW()
             RETURNING id, doctor_id, patient_id, assigned_at",
        )
        .bind(doctor_id)
        .bind(patient_id)
        .fetch_one(pool)
        .await
    }

    /// The ID of the patient's assigned doctor, if any.
    pub async fn doctor_id_for<'e, E>(
        executor: E,
        patient_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT doctor_id FROM doctor_patient WHERE patient_id = $1")
            .bind(patient_id)
            .fetch_optional(executor)
            .await
    }

    /// The patient's assigned doctor with directory details.
    pub async fn find_doctor(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Option<DoctorSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM doctor_patient dp
             JOIN users u ON u.id = dp.doctor_id
             LEFT JOIN doctors d ON d.user_id = u.id
             LEFT JOIN specialties s ON s.id = d.specialty_id
             WHERE dp.patient_id = $1"
        );
        sqlx::query_as::<_, DoctorSummary>(&query)
            .bind(patient_id)
            .fetch_optional(pool)
            .await
    }
}
