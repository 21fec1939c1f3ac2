//! Handlers for medications.
//!
//! Doctor-initiated changes write an audit row to `medication_changes` and
//! notify the patient, in the same transaction as the change itself.

use axum::extract::{Path, Query, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::notifications::{self, MedicationRef, FALLBACK_DOCTOR_NAME};
use glyco_core::types::DbId;
use glyco_core::validation::{is_present, require_present};
use glyco_db::models::medication::{
    CreateMedication, CreateMedicationChange, Medication, CHANGE_DELETE, CHANGE_UPDATE,
};
use glyco_db::repositories::{MedicationRepo, NotificationRepo, UserRepo};
use serde::{Deserialize, Deserializer};
use sqlx::PgConnection;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /medications`.
#[derive(Debug, Deserialize)]
pub struct CreateMedicationRequest {
    pub patient_id: Option<DbId>,
    pub doctor_id: Option<DbId>,
    pub med_name: Option<String>,
    pub dosage: Option<String>,
    pub med_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub added_by_patient: bool,
}

/// Request body for `PUT /medications/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateMedicationRequest {
    pub dosage: Option<String>,
    pub doctor_id: Option<DbId>,
}

/// Query parameters for `DELETE /medications/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteMedicationParams {
    pub doctor_id: Option<DbId>,
}

/// Accept `true`/`false`, `0`/`1`, or their string forms.
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        serde_json::Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            other => Err(D::Error::custom(format!(
                "added_by_patient must be a boolean, got '{other}'"
            ))),
        },
        other => Err(D::Error::custom(format!(
            "added_by_patient must be a boolean, got {other}"
        ))),
    }
}

async fn doctor_name(conn: &mut PgConnection, doctor_id: DbId) -> Result<String, sqlx::Error> {
    Ok(UserRepo::find_name(conn, doctor_id)
        .await?
        .unwrap_or_else(|| FALLBACK_DOCTOR_NAME.to_string()))
}

fn medication_ref(medication: &Medication) -> MedicationRef<'_> {
    MedicationRef {
        name: &medication.med_name,
        med_type: &medication.med_type,
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /medications/{patient_id}
///
/// Active medications, newest first.
pub async fn list_medications(
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<Medication>>> {
    let medications = MedicationRepo::list_active(&state.pool, patient_id).await?;
    Ok(Json(medications))
}

/// POST /medications
///
/// `doctor_id` is required unless the patient adds the medication
/// themselves. A doctor's prescription notifies the patient.
pub async fn add_medication(
    State(state): State<AppState>,
    Json(input): Json<CreateMedicationRequest>,
) -> AppResult<Json<MessageResponse>> {
    require_present(
        &[
            input.patient_id.is_some_and(|id| id > 0),
            is_present(&input.med_name),
            is_present(&input.dosage),
            is_present(&input.med_type),
        ],
        "All fields required",
    )?;
    if !input.added_by_patient && input.doctor_id.is_none() {
        return Err(CoreError::Validation("Doctor ID required".into()).into());
    }

    let (Some(patient_id), Some(med_name), Some(dosage), Some(med_type)) =
        (input.patient_id, input.med_name, input.dosage, input.med_type)
    else {
        return Err(CoreError::Validation("All fields required".into()).into());
    };

    let mut tx = state.pool.begin().await?;

    let medication = MedicationRepo::create(
        &mut *tx,
        &CreateMedication {
            patient_id,
            doctor_id: input.doctor_id,
            med_name,
            dosage,
            med_type,
            added_by_patient: input.added_by_patient,
        },
    )
    .await?;

    if let (Some(doctor_id), false) = (medication.doctor_id, medication.added_by_patient) {
        let name = doctor_name(&mut tx, doctor_id).await?;
        let draft = notifications::prescription_added(
            patient_id,
            &name,
            medication_ref(&medication),
            &medication.dosage,
        );
        NotificationRepo::create(&mut *tx, &draft).await?;
    }

    tx.commit().await?;

    tracing::info!(
        medication_id = medication.id,
        patient_id,
        doctor_id = ?medication.doctor_id,
        added_by_patient = medication.added_by_patient,
        "Medication added"
    );

    Ok(Json(MessageResponse::new("Medication added")))
}

/// PUT /medications/{id}
///
/// Change the dosage. With a `doctor_id`, the change is audited and the
/// patient is notified.
pub async fn update_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<DbId>,
    Json(input): Json<UpdateMedicationRequest>,
) -> AppResult<Json<MessageResponse>> {
    let new_dosage = match input.dosage.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => return Err(CoreError::Validation("dosage required".into()).into()),
    };

    let mut tx = state.pool.begin().await?;

    let medication = MedicationRepo::find_for_update(&mut *tx, medication_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Medication",
            id: medication_id,
        })?;

    MedicationRepo::update_dosage(&mut *tx, medication_id, &new_dosage).await?;

    if let Some(doctor_id) = input.doctor_id {
        MedicationRepo::record_change(
            &mut *tx,
            &CreateMedicationChange {
                medication_id,
                doctor_id,
                change_type: CHANGE_UPDATE,
                old_dosage: Some(&medication.dosage),
                new_dosage: Some(&new_dosage),
            },
        )
        .await?;

        let name = doctor_name(&mut tx, doctor_id).await?;
        let draft = notifications::dosage_updated(
            medication.patient_id,
            &name,
            medication_ref(&medication),
            &medication.dosage,
            &new_dosage,
        );
        NotificationRepo::create(&mut *tx, &draft).await?;
    }

    tx.commit().await?;

    tracing::info!(
        medication_id,
        doctor_id = ?input.doctor_id,
        old_dosage = %medication.dosage,
        new_dosage = %new_dosage,
        "Medication dosage updated"
    );

    Ok(Json(MessageResponse::new("Medication updated")))
}

/// DELETE /medications/{id}?doctor_id=
///
/// Deactivate a medication. The row is kept for the audit trail.
pub async fn delete_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<DbId>,
    Query(params): Query<DeleteMedicationParams>,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = state.pool.begin().await?;

    let medication = MedicationRepo::find_for_update(&mut *tx, medication_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Medication",
            id: medication_id,
        })?;

    MedicationRepo::deactivate(&mut *tx, medication_id).await?;

    if let Some(doctor_id) = params.doctor_id {
        MedicationRepo::record_change(
            &mut *tx,
            &CreateMedicationChange {
                medication_id,
                doctor_id,
                change_type: CHANGE_DELETE,
                old_dosage: Some(&medication.dosage),
                new_dosage: None,
            },
        )
        .await?;

        let name = doctor_name(&mut tx, doctor_id).await?;
        let draft = notifications::medication_removed(
            medication.patient_id,
            &name,
            medication_ref(&medication),
            &medication.dosage,
        );
        NotificationRepo::create(&mut *tx, &draft).await?;
    }

    tx.commit().await?;

    tracing::info!(medication_id, doctor_id = ?params.doctor_id, "Medication deactivated");

    Ok(Json(MessageResponse::new("Medication deleted")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn flag(value: serde_json::Value) -> Result<bool, serde_json::Error> {
        let body = json!({ "added_by_patient": value });
        serde_json::from_value::<CreateMedicationRequest>(body).map(|r| r.added_by_patient)
    }

    #[test]
    fn added_by_patient_accepts_loose_forms() {
        assert!(flag(json!(true)).unwrap());
        assert!(flag(json!(1)).unwrap());
        assert!(flag(json!("1")).unwrap());
        assert!(flag(json!("true")).unwrap());
        assert!(!flag(json!(0)).unwrap());
        assert!(!flag(json!("0")).unwrap());
        assert!(!flag(json!(false)).unwrap());
        assert!(!flag(json!(null)).unwrap());
        assert!(flag(json!("maybe")).is_err());
    }

    #[test]
    fn added_by_patient_defaults_to_false() {
        let request: CreateMedicationRequest = serde_json::from_value(json!({})).unwrap();
        assert!(!request.added_by_patient);
    }
}
