//! Handlers for the doctor directory and doctor/patient assignment.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use glyco_db::models::doctor::{DoctorSummary, Specialty};
use glyco_db::models::patient::PatientSummary;
use glyco_db::repositories::{AssignmentRepo, DoctorRepo, PatientRepo, SpecialtyRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::require_id;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /assign_doctor`.
#[derive(Debug, Deserialize)]
pub struct AssignDoctorRequest {
    pub doctor_id: Option<DbId>,
    pub patient_id: Option<DbId>,
}

/// GET /doctors
pub async fn list_doctors(State(state): State<AppState>) -> AppResult<Json<Vec<DoctorSummary>>> {
    let doctors = DoctorRepo::list(&state.pool).await?;
    Ok(Json(doctors))
}

/// GET /specialties
pub async fn list_specialties(State(state): State<AppState>) -> AppResult<Json<Vec<Specialty>>> {
    let specialties = SpecialtyRepo::list(&state.pool).await?;
    Ok(Json(specialties))
}

/// POST /assign_doctor
///
/// A patient has at most one doctor; assigning replaces the previous one.
pub async fn assign_doctor(
    State(state): State<AppState>,
    Json(input): Json<AssignDoctorRequest>,
) -> AppResult<Json<MessageResponse>> {
    const REQUIRED: &str = "doctor_id and patient_id required";
    let doctor_id = require_id(input.doctor_id, REQUIRED)?;
    let patient_id = require_id(input.patient_id, REQUIRED)?;

    AssignmentRepo::assign(&state.pool, doctor_id, patient_id).await?;

    tracing::info!(doctor_id, patient_id, "Doctor assigned");

    Ok(Json(MessageResponse::new("Doctor assigned")))
}

/// GET /mydoctor/{patient_id}
pub async fn my_doctor(
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<DoctorSummary>> {
    let doctor = AssignmentRepo::find_doctor(&state.pool, patient_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Assigned doctor for patient",
            id: patient_id,
        })?;
    Ok(Json(doctor))
}

/// GET /patients/{doctor_id}
pub async fn list_patients(
    State(state): State<AppState>,
    Path(doctor_id): Path<DbId>,
) -> AppResult<Json<Vec<PatientSummary>>> {
    let patients = PatientRepo::list_for_doctor(&state.pool, doctor_id).await?;
    Ok(Json(patients))
}
