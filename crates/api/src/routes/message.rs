use axum::routing::{get, post};
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST   /                          -> send_message
/// GET    /{user_a}/{user_b}         -> get_conversation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(message::send_message))
        .route("/{user_a}/{user_b}", get(message::get_conversation))
}
