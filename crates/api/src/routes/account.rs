//! Route definitions for accounts, profiles, and doctor assignment.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, doctor, profile};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST   /register                       -> register
/// POST   /login                          -> login
/// GET    /patient_profile/{user_id}      -> get_patient_profile
/// PUT    /patient_profile/{user_id}      -> update_patient_profile
/// GET    /doctor_profile/{user_id}       -> get_doctor_profile
/// PUT    /doctor_profile/{user_id}       -> update_doctor_profile
/// GET    /doctors                        -> list_doctors
/// GET    /specialties                    -> list_specialties
/// POST   /assign_doctor                  -> assign_doctor
/// GET    /mydoctor/{patient_id}          -> my_doctor
/// GET    /patients/{doctor_id}           -> list_patients
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/patient_profile/{user_id}",
            get(profile::get_patient_profile).put(profile::update_patient_profile),
        )
        .route(
            "/doctor_profile/{user_id}",
            get(profile::get_doctor_profile).put(profile::update_doctor_profile),
        )
        .route("/doctors", get(doctor::list_doctors))
        .route("/specialties", get(doctor::list_specialties))
        .route("/assign_doctor", post(doctor::assign_doctor))
        .route("/mydoctor/{patient_id}", get(doctor::my_doctor))
        .route("/patients/{doctor_id}", get(doctor::list_patients))
}
