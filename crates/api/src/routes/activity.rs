//! Route definitions for the `/activities` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// POST   /                          -> add_activity
/// GET    /{id}                      -> list_activities (user ID)
/// DELETE /{id}                      -> delete_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(activity::add_activity)).route(
        "/{id}",
        get(activity::list_activities).delete(activity::delete_activity),
    )
}
