//! Route definitions for the `/appointments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::appointment;
use crate::state::AppState;

/// Routes mounted at `/appointments`.
///
/// ```text
/// POST   /                          -> create_appointment
/// GET    /{id}                      -> list_doctor_appointments (doctor ID)
/// PUT    /{id}                      -> update_appointment
/// DELETE /{id}                      -> delete_appointment
/// GET    /patient/{patient_id}      -> list_patient_appointments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(appointment::create_appointment))
        .route(
            "/{id}",
            get(appointment::list_doctor_appointments)
                .put(appointment::update_appointment)
                .delete(appointment::delete_appointment),
        )
        .route(
            "/patient/{patient_id}",
            get(appointment::list_patient_appointments),
        )
}
