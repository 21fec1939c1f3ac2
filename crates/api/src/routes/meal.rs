//! Route definitions for the `/meals` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::meal;
use crate::state::AppState;

/// Routes mounted at `/meals`.
///
/// ```text
/// POST   /                          -> add_meal
/// GET    /{id}                      -> list_meals (user ID)
/// DELETE /{id}                      -> delete_meal (meal ID)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(meal::add_meal))
        .route("/{id}", get(meal::list_meals).delete(meal::delete_meal))
}
