//! Schema bootstrap checks. These need a PostgreSQL `DATABASE_URL`; run with
//! `cargo test -- --ignored`.

use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_full_bootstrap(pool: PgPool) {
    glyco_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "specialties",
        "patients",
        "doctors",
        "doctor_patient",
        "glucose_logs",
        "meals",
        "physical_activities",
        "reminders",
        "medications",
        "medication_changes",
        "messages",
        "articles",
        "challenges",
        "challenge_participants",
        "faqs",
        "appointments",
        "notifications",
    ];

    for table in tables {
        sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }
}

/// Specialties are seeded so doctors can register immediately.
#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_specialties_seeded(pool: PgPool) {
    let specialties = glyco_db::repositories::SpecialtyRepo::list(&pool)
        .await
        .unwrap();
    assert!(!specialties.is_empty());

    let names: Vec<_> = specialties.iter().map(|s| s.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted, "specialties should be ordered by name");
}
