//! Route definitions for the `/medications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::medication;
use crate::state::AppState;

/// Routes mounted at `/medications`.
///
/// `{id}` is the patient ID for `GET` and the medication ID otherwise.
///
/// ```text
/// POST   /                          -> add_medication
/// GET    /{id}                      -> list_medications
/// PUT    /{id}                      -> update_medication
/// DELETE /{id}?doctor_id=           -> delete_medication
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(medication::add_medication)).route(
        "/{id}",
        get(medication::list_medications)
            .put(medication::update_medication)
            .delete(medication::delete_medication),
    )
}
