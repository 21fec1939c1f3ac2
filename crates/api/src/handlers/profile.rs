//! Handlers for patient and doctor profiles.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use glyco_db::models::doctor::{DoctorProfile, DoctorProfileFields};
use glyco_db::models::patient::{PatientProfile, PatientProfileFields};
use glyco_db::repositories::{DoctorRepo, PatientRepo};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /patient_profile/{user_id}
pub async fn get_patient_profile(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<PatientProfile>> {
    let profile = PatientRepo::find_profile(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Patient profile",
            id: user_id,
        })?;
    Ok(Json(profile))
}

/// PUT /patient_profile/{user_id}
///
/// Overwrites every profile field; omitted fields are cleared.
pub async fn update_patient_profile(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<PatientProfileFields>,
) -> AppResult<Json<MessageResponse>> {
    if !PatientRepo::update(&state.pool, user_id, &input).await? {
        return Err(CoreError::NotFound {
            entity: "Patient profile",
            id: user_id,
        }
        .into());
    }

    tracing::info!(user_id, "Patient profile updated");

    Ok(Json(MessageResponse::new("Profile updated")))
}

/// GET /doctor_profile/{user_id}
pub async fn get_doctor_profile(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DoctorProfile>> {
    let profile = DoctorRepo::find_profile(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Doctor profile",
            id: user_id,
        })?;
    Ok(Json(profile))
}

/// PUT /doctor_profile/{user_id}
pub async fn update_doctor_profile(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<DoctorProfileFields>,
) -> AppResult<Json<MessageResponse>> {
    if !DoctorRepo::update(&state.pool, user_id, &input).await? {
        return Err(CoreError::NotFound {
            entity: "Doctor profile",
            id: user_id,
        }
        .into());
    }

    tracing::info!(user_id, "Doctor profile updated");

    Ok(Json(MessageResponse::new("Profile updated")))
}
