//! HTTP-level tests for the glucose logging workflow.

mod common;

use axum::http::StatusCode;
use common::{any_specialty_id, body_json, build_test_app, get, post_json, put_json, register_user};
use serde_json::json;
use sqlx::PgPool;

/// Register a doctor and a patient and assign one to the other.
async fn assigned_pair(pool: &PgPool, diabetes_type: &str) -> (i64, i64) {
    let specialty_id = any_specialty_id(pool).await;
    let doctor = register_user(
        pool,
        "Dr. Who",
        "who@example.com",
        "doctor",
        json!({"specialty_id": specialty_id}),
    )
    .await;
    let patient = register_user(
        pool,
        "Alice",
        "alice@example.com",
        "patient",
        json!({"diabetes_type": diabetes_type}),
    )
    .await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/assign_doctor",
        json!({"doctor_id": doctor, "patient_id": patient}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    (doctor, patient)
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn abnormal_reading_alerts_assigned_doctor(pool: PgPool) {
    let (doctor, patient) = assigned_pair(&pool, "Type 1").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/glucose",
        json!({"user_id": patient, "glucose_level": 60, "context": "Fasting"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Glucose log added");
    assert_eq!(json["category"], "Hypoglycemia");
    assert_eq!(json["doctor_id"], doctor);

    let json = body_json(get(build_test_app(pool.clone()), &format!("/notifications/{doctor}")).await).await;
    let feed = json.as_array().unwrap();
    assert_eq!(feed.len(), 2);
    assert!(feed.iter().all(|n| n["type"] == "glucose" && n["is_read"] == false));
    assert!(feed
        .iter()
        .any(|n| n["title"] == "ALERT: Alice has had a hypoglycemia!"));
    assert!(feed
        .iter()
        .any(|n| n["title"] == "Alice has logged a new blood glucose value"));

    let response = put_json(
        build_test_app(pool),
        &format!("/notifications/mark_read/{doctor}"),
        json!({}),
    )
    .await;
    assert_eq!(body_json(response).await["marked_read"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn normal_reading_sends_routine_notice_only(pool: PgPool) {
    let (doctor, patient) = assigned_pair(&pool, "Type 2").await;

    let json = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/glucose",
            json!({"user_id": patient, "glucose_level": "180", "context": "Post-meal"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["category"], "Normal");

    let json = body_json(get(build_test_app(pool), &format!("/notifications/{doctor}")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn gestational_upper_bound_is_exclusive(pool: PgPool) {
    let (_, patient) = assigned_pair(&pool, "Gestational").await;

    let json = body_json(
        post_json(
            build_test_app(pool),
            "/glucose",
            json!({"user_id": patient, "glucose_level": 95, "context": "Fasting"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["category"], "Hyperglycemia");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn user_without_profile_is_classified_as_type_2(pool: PgPool) {
    let caregiver = register_user(&pool, "Bob", "bob@example.com", "caregiver", json!({})).await;

    let json = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/glucose",
            json!({"user_id": caregiver, "glucose_level": 175}),
        )
        .await,
    )
    .await;
    assert_eq!(json["category"], "Normal");
    assert!(json["doctor_id"].is_null());

    let json = body_json(get(build_test_app(pool), &format!("/glucose/{caregiver}")).await).await;
    let logs = json.as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["context"], "Other");
    assert_eq!(logs[0]["category"], "Normal");
    assert!(logs[0]["timestamp"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn daily_count_and_graph_track_readings(pool: PgPool) {
    let (_, patient) = assigned_pair(&pool, "Type 1").await;

    for level in [60, 120, 250] {
        let response = post_json(
            build_test_app(pool.clone()),
            "/glucose",
            json!({"user_id": patient, "glucose_level": level, "context": "Fasting"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let json = body_json(
        get(build_test_app(pool.clone()), &format!("/glucose/daily_count/{patient}")).await,
    )
    .await;
    assert_eq!(json["count"], 3);

    let json = body_json(get(build_test_app(pool), &format!("/glucose/graph/{patient}")).await).await;
    let levels: Vec<f64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["glucose_level"].as_f64().unwrap())
        .collect();
    assert_eq!(levels, vec![60.0, 120.0, 250.0]);
}
