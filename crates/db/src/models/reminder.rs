//! Reminder models.

use chrono::NaiveTime;
use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// Default `frequency` when the client sends none.
pub const DEFAULT_FREQUENCY: &str = "once";

/// A row from the `reminders` table.
///
/// `remind_at` serializes as `"time"` in `HH:MM:SS` form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reminder {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub reminder_type: String,
    #[serde(rename = "time", serialize_with = "serialize_time")]
    pub remind_at: NaiveTime,
    pub frequency: String,
    pub created_at: Timestamp,
}

fn serialize_time<S: serde::Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&time.format("%H:%M:%S"))
}

/// Fields written on create and on full update.
#[derive(Debug)]
pub struct ReminderFields {
    pub title: String,
    pub reminder_type: String,
    pub remind_at: NaiveTime,
    pub frequency: String,
}
