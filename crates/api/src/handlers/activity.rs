//! Handlers for physical activity logging.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use glyco_core::validation::{required, validate_non_negative};
use glyco_db::models::activity::{Activity, CreateActivity};
use glyco_db::repositories::ActivityRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::require_id;
use crate::response::MessageResponse;
use crate::state::AppState;

const RECENT_LIMIT: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub user_id: Option<DbId>,
    pub activity_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
}

/// POST /activities
pub async fn add_activity(
    State(state): State<AppState>,
    Json(input): Json<CreateActivityRequest>,
) -> AppResult<Json<MessageResponse>> {
    const REQUIRED: &str = "user_id and activity_type required";
    let user_id = require_id(input.user_id, REQUIRED)?;
    let activity_type = required(&input.activity_type, REQUIRED)?;

    validate_non_negative(input.duration_minutes.map(f64::from), "duration_minutes")?;
    validate_non_negative(input.calories_burned, "calories_burned")?;

    let activity = ActivityRepo::create(
        &state.pool,
        &CreateActivity {
            user_id,
            activity_type: activity_type.to_string(),
            duration_minutes: input.duration_minutes,
            calories_burned: input.calories_burned,
            notes: input.notes.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(activity_id = activity.id, user_id, "Activity added");

    Ok(Json(MessageResponse::new("Activity added")))
}

/// DELETE /activities/{id}
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ActivityRepo::delete(&state.pool, activity_id).await? {
        return Err(CoreError::NotFound {
            entity: "Activity",
            id: activity_id,
        }
        .into());
    }
    tracing::info!(activity_id, "Activity deleted");
    Ok(Json(MessageResponse::new("Activity deleted")))
}

/// GET /activities/{user_id}
pub async fn list_activities(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list_recent(&state.pool, user_id, RECENT_LIMIT).await?;
    Ok(Json(activities))
}
