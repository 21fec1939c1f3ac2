//! Patient profile models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use glyco_core::types::DbId;

/// Profile fields stored in the `patients` table.
///
/// Used both as the registration payload tail and as the full-overwrite body
/// of `PUT /patient_profile/{user_id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, FromRow)]
pub struct PatientProfileFields {
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub diabetes_type: Option<String>,
    pub health_background: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub weight_kg: Option<f64>,
    pub hydration_liters: Option<f64>,
}

/// A user joined with their patient profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PatientProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: PatientProfileFields,
}

/// A patient as listed for their doctor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PatientSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub diabetes_type: Option<String>,
}
