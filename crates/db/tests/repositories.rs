//! Repository behaviour against a real database. Run with
//! `cargo test -- --ignored` and a PostgreSQL `DATABASE_URL`.

use chrono::NaiveDate;
use glyco_core::notifications;
use glyco_core::types::DbId;
use glyco_db::models::appointment::{CreateAppointment, UpdateAppointment};
use glyco_db::models::challenge::CreateChallenge;
use glyco_db::models::glucose::CreateGlucoseLog;
use glyco_db::models::user::CreateUser;
use glyco_db::repositories::{
    AppointmentRepo, AssignmentRepo, ChallengeRepo, GlucoseLogRepo, MessageRepo,
    NotificationRepo, UserRepo,
};
use sqlx::PgPool;

async fn create_user(pool: &PgPool, email: &str, role: &str) -> DbId {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$test".to_string(),
        name: format!("User {email}"),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn duplicate_email_hits_named_constraint(pool: PgPool) {
    create_user(&pool, "dup@example.com", "patient").await;

    let input = CreateUser {
        email: "dup@example.com".to_string(),
        password_hash: "x".to_string(),
        name: "Again".to_string(),
        role: "patient".to_string(),
    };
    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn glucose_logs_list_and_count(pool: PgPool) {
    let user = create_user(&pool, "g@example.com", "patient").await;

    for level in [90.0, 150.0, 60.0] {
        let input = CreateGlucoseLog {
            user_id: user,
            glucose_level: level,
            context: "Other".to_string(),
            category: "Normal".to_string(),
        };
        GlucoseLogRepo::create(&pool, &input).await.unwrap();
    }

    let recent = GlucoseLogRepo::list_recent(&pool, user, 30).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert!(recent[0].recorded_at >= recent[2].recorded_at);

    let chart = GlucoseLogRepo::list_chronological(&pool, user, 2).await.unwrap();
    assert_eq!(chart.len(), 2);
    assert!(chart[0].recorded_at <= chart[1].recorded_at);

    assert_eq!(GlucoseLogRepo::count_today(&pool, user).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn assignment_replaces_previous_doctor(pool: PgPool) {
    let patient = create_user(&pool, "p@example.com", "patient").await;
    let first = create_user(&pool, "d1@example.com", "doctor").await;
    let second = create_user(&pool, "d2@example.com", "doctor").await;

    AssignmentRepo::assign(&pool, first, patient).await.unwrap();
    AssignmentRepo::assign(&pool, second, patient).await.unwrap();

    let doctor = AssignmentRepo::doctor_id_for(&pool, patient).await.unwrap();
    assert_eq!(doctor, Some(second));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn joining_a_challenge_twice_is_a_no_op(pool: PgPool) {
    let user = create_user(&pool, "c@example.com", "patient").await;
    let input = CreateChallenge {
        creator_id: user,
        title: "Walk".to_string(),
        description: "10k steps".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    };
    let challenge = ChallengeRepo::create(&pool, &input).await.unwrap();

    assert!(ChallengeRepo::join(&pool, challenge, user).await.unwrap());
    assert!(!ChallengeRepo::join(&pool, challenge, user).await.unwrap());
    assert_eq!(ChallengeRepo::list_joined(&pool, user).await.unwrap().len(), 1);

    assert!(ChallengeRepo::leave(&pool, challenge, user).await.unwrap());
    assert!(ChallengeRepo::list_joined(&pool, user).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn conversation_is_chronological(pool: PgPool) {
    let a = create_user(&pool, "a@example.com", "patient").await;
    let b = create_user(&pool, "b@example.com", "doctor").await;

    MessageRepo::create(&pool, a, b, "first").await.unwrap();
    MessageRepo::create(&pool, b, a, "second").await.unwrap();
    MessageRepo::create(&pool, a, b, "third").await.unwrap();

    let messages = MessageRepo::conversation(&pool, b, a, 2).await.unwrap();
    let texts: Vec<_> = messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, ["second", "third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn appointment_update_keeps_unset_fields(pool: PgPool) {
    let patient = create_user(&pool, "ap@example.com", "patient").await;
    let doctor = create_user(&pool, "ad@example.com", "doctor").await;
    let time = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    let created = AppointmentRepo::create(
        &pool,
        &CreateAppointment {
            doctor_id: doctor,
            patient_id: patient,
            appointment_time: time,
            notes: "bring logbook".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.status, "scheduled");

    let update = UpdateAppointment {
        status: Some("confirmed".to_string()),
        ..Default::default()
    };
    let updated = AppointmentRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "confirmed");
    assert_eq!(updated.appointment_time, time);
    assert_eq!(updated.notes, "bring logbook");

    assert!(AppointmentRepo::update(&pool, created.id + 1000, &update)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn mark_all_read_counts_only_unread(pool: PgPool) {
    let user = create_user(&pool, "n@example.com", "patient").await;

    NotificationRepo::create(&pool, &notifications::appointment_created(user))
        .await
        .unwrap();
    NotificationRepo::create(&pool, &notifications::appointment_created(user))
        .await
        .unwrap();

    assert_eq!(NotificationRepo::mark_all_read(&pool, user).await.unwrap(), 2);
    assert_eq!(NotificationRepo::mark_all_read(&pool, user).await.unwrap(), 0);

    let feed = NotificationRepo::list_for_user(&pool, user, 30).await.unwrap();
    assert_eq!(feed.len(), 2);
    assert!(feed.iter().all(|n| n.is_read && n.kind == "appointment"));
}
