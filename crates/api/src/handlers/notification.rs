//! Handlers for the in-app notification feed.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::types::DbId;
use glyco_db::models::notification::Notification;
use glyco_db::repositories::NotificationRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Notifications returned by `GET /notifications/{user_id}`.
const FEED_LIMIT: i64 = 30;

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub message: &'static str,
    /// Number of notifications that changed from unread to read.
    pub marked_read: u64,
}

/// GET /notifications/{user_id}
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, user_id, FEED_LIMIT).await?;
    Ok(Json(notifications))
}

/// PUT /notifications/mark_read/{user_id}
pub async fn mark_all_read(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<MarkReadResponse>> {
    let marked_read = NotificationRepo::mark_all_read(&state.pool, user_id).await?;

    tracing::debug!(user_id, marked_read, "Notifications marked read");

    Ok(Json(MarkReadResponse {
        message: "All notifications marked as read",
        marked_read,
    }))
}
