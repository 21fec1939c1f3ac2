//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Read paths take `&PgPool`; writes that take part in a multi-statement
//! workflow accept any [`sqlx::PgExecutor`] so callers can pass `&mut *tx`.

pub mod activity_repo;
pub mod appointment_repo;
pub mod article_repo;
pub mod assignment_repo;
pub mod challenge_repo;
pub mod doctor_repo;
pub mod faq_repo;
pub mod glucose_repo;
pub mod meal_repo;
pub mod medication_repo;
pub mod message_repo;
pub mod notification_repo;
pub mod patient_repo;
pub mod reminder_repo;
pub mod specialty_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use appointment_repo::AppointmentRepo;
pub use article_repo::ArticleRepo;
pub use assignment_repo::AssignmentRepo;
pub use challenge_repo::ChallengeRepo;
pub use doctor_repo::DoctorRepo;
pub use faq_repo::FaqRepo;
pub use glucose_repo::GlucoseLogRepo;
pub use meal_repo::MealRepo;
pub use medication_repo::MedicationRepo;
pub use message_repo::MessageRepo;
pub use notification_repo::NotificationRepo;
pub use patient_repo::PatientRepo;
pub use reminder_repo::ReminderRepo;
pub use specialty_repo::SpecialtyRepo;
pub use user_repo::UserRepo;
