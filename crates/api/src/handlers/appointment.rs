//! Handlers for appointments.
//!
//! Every change notifies the patient; a reschedule or cancellation also
//! notifies the doctor. Notifications share the transaction of the change.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::notifications::{self, UNKNOWN_NAME};
use glyco_core::types::DbId;
use glyco_core::validation::{is_present, parse_appointment_time, require_present};
use glyco_db::models::appointment::{
    CreateAppointment, DoctorAppointment, PatientAppointment, UpdateAppointment,
};
use glyco_db::repositories::{AppointmentRepo, NotificationRepo, UserRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: Option<DbId>,
    pub patient_id: Option<DbId>,
    pub appointment_time: Option<String>,
    pub notes: Option<String>,
}

/// Request body for `PUT /appointments/{id}`. Omitted fields are unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub appointment_time: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// POST /appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(input): Json<CreateAppointmentRequest>,
) -> AppResult<Json<MessageResponse>> {
    const REQUIRED: &str = "doctor_id, patient_id, appointment_time required";
    require_present(
        &[
            input.doctor_id.is_some_and(|id| id > 0),
            input.patient_id.is_some_and(|id| id > 0),
            is_present(&input.appointment_time),
        ],
        REQUIRED,
    )?;
    let (Some(doctor_id), Some(patient_id), Some(time)) =
        (input.doctor_id, input.patient_id, input.appointment_time.as_deref())
    else {
        return Err(CoreError::Validation(REQUIRED.into()).into());
    };
    let appointment_time = parse_appointment_time(time)?;

    let mut tx = state.pool.begin().await?;

    let appointment = AppointmentRepo::create(
        &mut *tx,
        &CreateAppointment {
            doctor_id,
            patient_id,
            appointment_time,
            notes: input.notes.unwrap_or_default(),
        },
    )
    .await?;

    NotificationRepo::create(&mut *tx, &notifications::appointment_created(patient_id)).await?;

    tx.commit().await?;

    tracing::info!(
        appointment_id = appointment.id,
        doctor_id,
        patient_id,
        %appointment_time,
        "Appointment scheduled"
    );

    Ok(Json(MessageResponse::new("Appointment scheduled")))
}

/// PUT /appointments/{id}
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<DbId>,
    Json(input): Json<UpdateAppointmentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let appointment_time = match input.appointment_time.as_deref() {
        Some(t) if !t.trim().is_empty() => Some(parse_appointment_time(t)?),
        _ => None,
    };
    let update = UpdateAppointment {
        appointment_time,
        notes: input.notes,
        status: input.status.filter(|s| !s.trim().is_empty()),
    };

    let mut tx = state.pool.begin().await?;

    let appointment = AppointmentRepo::update(&mut *tx, appointment_id, &update)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Appointment",
            id: appointment_id,
        })?;

    let patient_name = UserRepo::find_name(&mut *tx, appointment.patient_id)
        .await?
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let drafts = notifications::appointment_updated(
        appointment.patient_id,
        appointment.doctor_id,
        &patient_name,
        update.status.as_deref(),
    );
    for draft in &drafts {
        NotificationRepo::create(&mut *tx, draft).await?;
    }

    tx.commit().await?;

    tracing::info!(
        appointment_id,
        status = %appointment.status,
        notified = drafts.len(),
        "Appointment updated"
    );

    Ok(Json(MessageResponse::new("Appointment updated")))
}

/// DELETE /appointments/{id}
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = state.pool.begin().await?;

    let appointment = AppointmentRepo::delete(&mut *tx, appointment_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Appointment",
            id: appointment_id,
        })?;

    let patient_name = UserRepo::find_name(&mut *tx, appointment.patient_id)
        .await?
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    for draft in notifications::appointment_cancelled(
        appointment.patient_id,
        appointment.doctor_id,
        &patient_name,
    ) {
        NotificationRepo::create(&mut *tx, &draft).await?;
    }

    tx.commit().await?;

    tracing::info!(appointment_id, "Appointment cancelled");

    Ok(Json(MessageResponse::new("Appointment cancelled")))
}

/// GET /appointments/{doctor_id}
pub async fn list_doctor_appointments(
    State(state): State<AppState>,
    Path(doctor_id): Path<DbId>,
) -> AppResult<Json<Vec<DoctorAppointment>>> {
    let appointments = AppointmentRepo::list_for_doctor(&state.pool, doctor_id).await?;
    Ok(Json(appointments))
}

/// GET /appointments/patient/{patient_id}
pub async fn list_patient_appointments(
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<PatientAppointment>>> {
    let appointments = AppointmentRepo::list_for_patient(&state.pool, patient_id).await?;
    Ok(Json(appointments))
}
