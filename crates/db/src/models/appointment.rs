//! Appointment models.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// A row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub doctor_id: DbId,
    pub patient_id: DbId,
    pub appointment_time: NaiveDateTime,
    pub notes: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// An appointment as seen by the doctor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DoctorAppointment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub appointment: Appointment,
    pub patient_name: String,
    pub patient_email: String,
}

/// An appointment as seen by the patient.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PatientAppointment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub appointment: Appointment,
    pub doctor_name: String,
    pub doctor_email: String,
}

/// DTO for booking an appointment.
#[derive(Debug)]
pub struct CreateAppointment {
    pub doctor_id: DbId,
    pub patient_id: DbId,
    pub appointment_time: NaiveDateTime,
    pub notes: String,
}

/// DTO for updating an appointment. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateAppointment {
    pub appointment_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub status: Option<String>,
}
