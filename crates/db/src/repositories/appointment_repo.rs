//! Repository for the `appointments` table.

use sqlx::{PgExecutor, PgPool};
use glyco_core::types::DbId;

use crate::models::appointment::{
    Appointment, CreateAppointment, DoctorAppointment, PatientAppointment, UpdateAppointment,
};

const COLUMNS: &str = "id, doctor_id, patient_id, appointment_time, notes, status, created_at";

/// Same columns, prefixed for joins against `appointments a`.
const JOINED_COLUMNS: &str = "a.id, a.doctor_id, a.patient_id, a.appointment_time, a.notes, \
                              a.status, a.created_at";

pub struct AppointmentRepo;

impl AppointmentRepo {
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO appointments (doctor_id, patient_id, appointment_time, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(input.doctor_id)
            .bind(input.patient_id)
            .bind(input.appointment_time)
            .bind(&input.notes)
            .fetch_one(executor)
            .await
    }

    /// Update an appointment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateAppointment,
    ) -> Result<Option<Appointment>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE appointments SET
                appointment_time = COALESCE($2, appointment_time),
                notes = COALESCE($3, notes),
                status = COALESCE($4, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(input.appointment_time)
            .bind(&input.notes)
            .bind(&input.status)
            .fetch_optional(executor)
            .await
    }

    /// Delete an appointment, returning the removed row.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<Option<Appointment>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("DELETE FROM appointments WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// A doctor's appointments with patient contact details, soonest first.
    pub async fn list_for_doctor(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Vec<DoctorAppointment>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, u.name AS patient_name, u.email AS patient_email
             FROM appointments a
             JOIN users u ON u.id = a.patient_id
             WHERE a.doctor_id = $1
             ORDER BY a.appointment_time ASC"
        );
        sqlx::query_as::<_, DoctorAppointment>(&query)
            .bind(doctor_id)
            .fetch_all(pool)
            .await
    }

    /// A patient's appointments with doctor contact details, soonest first.
    pub async fn list_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<PatientAppointment>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, u.name AS doctor_name, u.email AS doctor_email
             FROM appointments a
             JOIN users u ON u.id = a.doctor_id
             WHERE a.patient_id = $1
             ORDER BY a.appointment_time ASC"
        );
        sqlx::query_as::<_, PatientAppointment>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }
}
