pub mod account;
pub mod activity;
pub mod appointment;
pub mod article;
pub mod challenge;
pub mod faq;
pub mod glucose;
pub mod health;
pub mod meal;
pub mod medication;
pub mod message;
pub mod notification;
pub mod reminder;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /register, /login                                 account creation and login
/// /patient_profile/{user_id}                        get, overwrite
/// /doctor_profile/{user_id}                         get, overwrite
/// /doctors, /specialties                            directory
/// /assign_doctor                                    assign (POST)
/// /mydoctor/{patient_id}                            assigned doctor
/// /patients/{doctor_id}                             assigned patients
///
/// /glucose                                          log a reading (POST)
/// /glucose/classify                                 classify without storing (POST)
/// /glucose/{user_id}                                recent readings
/// /glucose/daily_count/{user_id}                    readings today
/// /glucose/graph/{user_id}                          chronological readings
///
/// /medications                                      add (POST)
/// /medications/{id}                                 list by patient, update, deactivate
/// /meals, /meals/{id}                               add; list by user, delete
/// /reminders, /reminders/{id}                       add; list by user, update, delete
/// /activities, /activities/{id}                     add; list by user, delete
///
/// /messages                                         send (POST)
/// /messages/{user_a}/{user_b}                       conversation
/// /articles                                         list, publish
/// /challenges                                       list, create
/// /challenges/join, /challenges/leave               participation (POST)
/// /challenges/user/{user_id}                        joined challenges
/// /faqs                                             list, ask
/// /faqs/answer/{id}                                 answer (POST)
///
/// /appointments                                     schedule (POST)
/// /appointments/{id}                                list by doctor, update, cancel
/// /appointments/patient/{patient_id}                list by patient
///
/// /notifications/{user_id}                          feed
/// /notifications/mark_read/{user_id}                mark all read (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration, login, profiles, doctor directory and assignment.
        .merge(account::router())
        // Glucose logging and classification.
        .nest("/glucose", glucose::router())
        // Daily self-management records.
        .nest("/medications", medication::router())
        .nest("/meals", meal::router())
        .nest("/reminders", reminder::router())
        .nest("/activities", activity::router())
        // Community features.
        .nest("/messages", message::router())
        .nest("/articles", article::router())
        .nest("/challenges", challenge::router())
        .nest("/faqs", faq::router())
        // Scheduling and the notification feed.
        .nest("/appointments", appointment::router())
        .nest("/notifications", notification::router())
}
