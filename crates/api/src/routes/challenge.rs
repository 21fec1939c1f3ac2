//! Route definitions for the `/challenges` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::challenge;
use crate::state::AppState;

/// Routes mounted at `/challenges`.
///
/// ```text
/// GET    /                          -> list_challenges
/// POST   /                          -> create_challenge
/// POST   /join                      -> join_challenge
/// POST   /leave                     -> leave_challenge
/// GET    /user/{user_id}            -> list_user_challenges
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(challenge::list_challenges).post(challenge::create_challenge),
        )
        .route("/join", post(challenge::join_challenge))
        .route("/leave", post(challenge::leave_challenge))
        .route("/user/{user_id}", get(challenge::list_user_challenges))
}
