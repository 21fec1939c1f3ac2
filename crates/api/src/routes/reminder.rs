//! Route definitions for the `/reminders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reminder;
use crate::state::AppState;

/// Routes mounted at `/reminders`.
///
/// ```text
/// POST   /                          -> add_reminder
/// GET    /{id}                      -> list_reminders (user ID)
/// PUT    /{id}                      -> update_reminder
/// DELETE /{id}                      -> delete_reminder
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reminder::add_reminder)).route(
        "/{id}",
        get(reminder::list_reminders)
            .put(reminder::update_reminder)
            .delete(reminder::delete_reminder),
    )
}
