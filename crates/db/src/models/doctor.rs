//! Doctor profile, specialty, and assignment models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// A row from the `specialties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Specialty {
    pub id: DbId,
    pub name: String,
}

/// Profile fields stored in the `doctors` table.
#[derive(Debug, Clone, Default, Deserialize, Serialize, FromRow)]
pub struct DoctorProfileFields {
    pub phone: Option<String>,
    pub specialty_id: Option<DbId>,
    pub clinic: Option<String>,
    pub geo_lat: Option<f64>,
    pub geo_lng: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub license_number: Option<String>,
}

/// A user joined with their doctor profile and specialty name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DoctorProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub specialty: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: DoctorProfileFields,
}

/// A doctor as listed in the directory and in `GET /mydoctor`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DoctorSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub specialty_id: Option<DbId>,
    pub specialty: Option<String>,
    pub clinic: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// A row from the `doctor_patient` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub doctor_id: DbId,
    pub patient_id: DbId,
    pub assigned_at: Timestamp,
}
