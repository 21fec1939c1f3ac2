//! Route definitions for the `/notifications` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /{user_id}                 -> list_notifications
/// PUT    /mark_read/{user_id}       -> mark_all_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}", get(notification::list_notifications))
        .route("/mark_read/{user_id}", put(notification::mark_all_read))
}
