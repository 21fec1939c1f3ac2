//! Repository for the `medications` and `medication_changes` tables.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::medication::{CreateMedication, CreateMedicationChange, Medication};

const COLUMNS: &str = "id, patient_id, doctor_id, med_name, dosage, med_type, \
                       added_by_patient, is_active, prescribed_at";

/// Provides medication operations and the change audit trail.
pub struct MedicationRepo;

impl MedicationRepo {
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateMedication,
    ) -> Result<Medication, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO medications (patient_id, doctor_id, med_name, dosage, med_type,
                                      added_by_patient)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Medication>(&query)
            .bind(input.patient_id)
            .bind(input.doctor_id)
            .bind(&input.med_name)
            .bind(&input.dosage)
            .bind(&input.med_type)
            .bind(input.added_by_patient)
            .fetch_one(executor)
            .await
    }

    /// Fetch a medication and lock its row for the rest of the transaction.
    pub async fn find_for_update<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Medication>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM medications WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Medication>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Active medications for a patient, newest first.
    pub async fn list_active(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<Medication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM medications
             WHERE patient_id = $1 AND is_active
             ORDER BY prescribed_at DESC, id DESC"
        );
        sqlx::query_as::<_, Medication>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update_dosage<'e, E>(executor: E, id: DbId, dosage: &str) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query("UPDATE medications SET dosage = $2 WHERE id = $1")
            .bind(id)
            .bind(dosage)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Soft-delete: the row stays for the audit trail.
    pub async fn deactivate<'e, E>(executor: E, id: DbId) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query("UPDATE medications SET is_active = false WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Append a row to the audit trail.
    pub async fn record_change<'e, E>(
        executor: E,
        change: &CreateMedicationChange<'_>,
    ) -> Result<DbId, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar(
            "INSERT INTO medication_changes (medication_id, doctor_id, change_type,
                                             old_dosage, new_dosage)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(change.medication_id)
        .bind(change.doctor_id)
        .bind(change.change_type)
        .bind(change.old_dosage)
        .bind(change.new_dosage)
        .fetch_one(executor)
        .await
    }
}
