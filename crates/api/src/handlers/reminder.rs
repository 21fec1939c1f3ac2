//! Handlers for reminders.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use glyco_core::validation::{is_present, parse_reminder_time, require_present};
use glyco_db::models::reminder::{Reminder, ReminderFields, DEFAULT_FREQUENCY};
use glyco_db::repositories::ReminderRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for creating (`user_id` required) or updating a reminder.
#[derive(Debug, Deserialize)]
pub struct ReminderRequest {
    pub user_id: Option<DbId>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub reminder_type: Option<String>,
    pub time: Option<String>,
    pub frequency: Option<String>,
}

impl ReminderRequest {
    /// Validate the editable fields. `frequency` defaults to `once`.
    fn into_fields(self) -> Result<ReminderFields, CoreError> {
        const REQUIRED: &str = "All fields required";
        require_present(
            &[
                is_present(&self.title),
                is_present(&self.reminder_type),
                is_present(&self.time),
            ],
            REQUIRED,
        )?;
        let (Some(title), Some(reminder_type), Some(time)) =
            (self.title, self.reminder_type, self.time)
        else {
            return Err(CoreError::Validation(REQUIRED.into()));
        };

        Ok(ReminderFields {
            title,
            reminder_type,
            remind_at: parse_reminder_time(&time)?,
            frequency: self
                .frequency
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FREQUENCY.to_string()),
        })
    }
}

/// POST /reminders
pub async fn add_reminder(
    State(state): State<AppState>,
    Json(input): Json<ReminderRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = input
        .user_id
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::Validation("All fields required".into()))?;
    let fields = input.into_fields()?;

    let reminder = ReminderRepo::create(&state.pool, user_id, &fields).await?;

    tracing::info!(reminder_id = reminder.id, user_id, "Reminder added");

    Ok(Json(MessageResponse::new("Reminder added")))
}

/// PUT /reminders/{id}
pub async fn update_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<DbId>,
    Json(input): Json<ReminderRequest>,
) -> AppResult<Json<MessageResponse>> {
    let fields = input.into_fields()?;

    ReminderRepo::update(&state.pool, reminder_id, &fields)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reminder",
            id: reminder_id,
        })?;

    tracing::info!(reminder_id, "Reminder updated");

    Ok(Json(MessageResponse::new("Reminder updated")))
}

/// DELETE /reminders/{id}
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ReminderRepo::delete(&state.pool, reminder_id).await? {
        return Err(CoreError::NotFound {
            entity: "Reminder",
            id: reminder_id,
        }
        .into());
    }
    tracing::info!(reminder_id, "Reminder deleted");
    Ok(Json(MessageResponse::new("Reminder deleted")))
}

/// GET /reminders/{user_id}
pub async fn list_reminders(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Reminder>>> {
    let reminders = ReminderRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(reminders))
}
