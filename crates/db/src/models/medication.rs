//! Medication and medication audit models.

use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// `medication_changes.change_type` for a dosage change.
pub const CHANGE_UPDATE: &str = "update";
/// `medication_changes.change_type` for a removal.
pub const CHANGE_DELETE: &str = "delete";

/// A row from the `medications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Medication {
    pub id: DbId,
    pub patient_id: DbId,
    pub doctor_id: Option<DbId>,
    pub med_name: String,
    pub dosage: String,
    pub med_type: String,
    pub added_by_patient: bool,
    pub is_active: bool,
    pub prescribed_at: Timestamp,
}

/// DTO for creating a medication.
#[derive(Debug)]
pub struct CreateMedication {
    pub patient_id: DbId,
    pub doctor_id: Option<DbId>,
    pub med_name: String,
    pub dosage: String,
    pub med_type: String,
    pub added_by_patient: bool,
}

/// A row from the `medication_changes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MedicationChange {
    pub id: DbId,
    pub medication_id: DbId,
    pub doctor_id: DbId,
    pub change_type: String,
    pub old_dosage: Option<String>,
    pub new_dosage: Option<String>,
    pub changed_at: Timestamp,
}

/// DTO for recording a doctor-initiated change.
#[derive(Debug)]
pub struct CreateMedicationChange<'a> {
    pub medication_id: DbId,
    pub doctor_id: DbId,
    pub change_type: &'a str,
    pub old_dosage: Option<&'a str>,
    pub new_dosage: Option<&'a str>,
}
