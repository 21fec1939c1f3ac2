//! Handlers for glucose logging.
//!
//! `POST /glucose` is the ingestion workflow: classify the reading against the
//! patient's diabetes type, store it, and alert the assigned doctor. The log,
//! and any notifications it produces, are written in one transaction.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::glucose::{
    classify, classify_raw, parse_glucose_value, DiabetesType, GlucoseCategory,
    MeasurementContext, DEFAULT_CONTEXT, DEFAULT_DIABETES_TYPE,
};
use glyco_core::notifications::{self, UNKNOWN_NAME};
use glyco_core::types::DbId;
use glyco_db::models::glucose::{CreateGlucoseLog, GlucoseLog};
use glyco_db::repositories::{
    AssignmentRepo, GlucoseLogRepo, NotificationRepo, PatientRepo, UserRepo,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::require_id;
use crate::state::AppState;

/// Readings returned by `GET /glucose/{user_id}`.
const RECENT_LIMIT: i64 = 30;

/// Readings returned by `GET /glucose/graph/{user_id}`.
const GRAPH_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /glucose`.
///
/// `glucose_level` is kept as raw JSON so numeric strings are accepted and
/// anything else is reported as an invalid argument rather than a parse error.
#[derive(Debug, Deserialize)]
pub struct GlucoseLogRequest {
    pub user_id: Option<DbId>,
    pub glucose_level: Option<serde_json::Value>,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GlucoseLogResponse {
    pub message: &'static str,
    pub category: GlucoseCategory,
    /// Assigned doctor that was notified, if any.
    pub doctor_id: Option<DbId>,
}

/// Request body for `POST /glucose/classify`.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub glucose_level: Option<serde_json::Value>,
    pub context: Option<String>,
    pub diabetes_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: GlucoseCategory,
}

#[derive(Debug, Serialize)]
pub struct DailyCountResponse {
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /glucose
pub async fn add_glucose_log(
    State(state): State<AppState>,
    Json(input): Json<GlucoseLogRequest>,
) -> AppResult<Json<GlucoseLogResponse>> {
    const REQUIRED: &str = "user_id and glucose_level required";
    let user_id = require_id(input.user_id, REQUIRED)?;
    let raw = input
        .glucose_level
        .filter(|v| !v.is_null())
        .ok_or_else(|| CoreError::Validation(REQUIRED.into()))?;
    let glucose_level = parse_glucose_value(&raw)?;
    let context = input.context.unwrap_or_else(|| DEFAULT_CONTEXT.to_string());

    let mut tx = state.pool.begin().await?;

    let profile_type = PatientRepo::find_diabetes_type(&mut *tx, user_id).await?;
    let diabetes_type = DiabetesType::for_profile(profile_type.as_ref().map(|t| t.as_deref()));
    let category = classify(
        glucose_level,
        MeasurementContext::from_label(&context),
        diabetes_type,
    );

    let log = GlucoseLogRepo::create(
        &mut *tx,
        &CreateGlucoseLog {
            user_id,
            glucose_level,
            context,
            category: category.as_str().to_string(),
        },
    )
    .await?;

    let doctor_id = AssignmentRepo::doctor_id_for(&mut *tx, user_id).await?;
    if let Some(doctor_id) = doctor_id {
        let patient_name = UserRepo::find_name(&mut *tx, user_id)
            .await?
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let drafts = notifications::glucose_logged(
            doctor_id,
            &patient_name,
            glucose_level,
            &log.context,
            category,
        );
        for draft in &drafts {
            NotificationRepo::create(&mut *tx, draft).await?;
        }
    }

    tx.commit().await?;

    if category.is_alert() {
        tracing::warn!(
            user_id,
            glucose_level,
            category = %category,
            doctor_id = ?doctor_id,
            "Abnormal glucose reading logged"
        );
    } else {
        tracing::info!(user_id, log_id = log.id, category = %category, "Glucose log added");
    }

    Ok(Json(GlucoseLogResponse {
        message: "Glucose log added",
        category,
        doctor_id,
    }))
}

/// POST /glucose/classify
///
/// Classify a reading without storing it. A missing `diabetes_type` is
/// treated like a user without a profile.
pub async fn classify_reading(
    Json(input): Json<ClassifyRequest>,
) -> AppResult<Json<ClassifyResponse>> {
    let raw = input
        .glucose_level
        .filter(|v| !v.is_null())
        .ok_or_else(|| CoreError::Validation("glucose_level required".into()))?;
    let context = input.context.as_deref().unwrap_or(DEFAULT_CONTEXT);
    let diabetes_type =
        DiabetesType::from_label(input.diabetes_type.as_deref().unwrap_or(DEFAULT_DIABETES_TYPE));

    let category = classify_raw(&raw, context, diabetes_type)?;
    Ok(Json(ClassifyResponse { category }))
}

/// GET /glucose/{user_id}
///
/// The most recent readings, newest first.
pub async fn list_glucose_logs(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<GlucoseLog>>> {
    let logs = GlucoseLogRepo::list_recent(&state.pool, user_id, RECENT_LIMIT).await?;
    Ok(Json(logs))
}

/// GET /glucose/daily_count/{user_id}
pub async fn daily_count(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DailyCountResponse>> {
    let count = GlucoseLogRepo::count_today(&state.pool, user_id).await?;
    Ok(Json(DailyCountResponse { count }))
}

/// GET /glucose/graph/{user_id}
///
/// Readings in chronological order for charting.
pub async fn graph_data(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<GlucoseLog>>> {
    let logs = GlucoseLogRepo::list_chronological(&state.pool, user_id, GRAPH_LIMIT).await?;
    Ok(Json(logs))
}
