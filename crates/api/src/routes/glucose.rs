//! Route definitions for the `/glucose` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::glucose;
use crate::state::AppState;

/// Routes mounted at `/glucose`.
///
/// ```text
/// POST   /                          -> add_glucose_log
/// POST   /classify                  -> classify_reading
/// GET    /{user_id}                 -> list_glucose_logs
/// GET    /daily_count/{user_id}     -> daily_count
/// GET    /graph/{user_id}           -> graph_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(glucose::add_glucose_log))
        .route("/classify", post(glucose::classify_reading))
        .route("/{user_id}", get(glucose::list_glucose_logs))
        .route("/daily_count/{user_id}", get(glucose::daily_count))
        .route("/graph/{user_id}", get(glucose::graph_data))
}
