//! Physical activity models.

use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// A row from the `physical_activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub user_id: DbId,
    pub activity_type: String,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<f64>,
    pub notes: String,
    #[serde(rename = "timestamp")]
    pub recorded_at: Timestamp,
}

/// DTO for logging an activity.
#[derive(Debug)]
pub struct CreateActivity {
    pub user_id: DbId,
    pub activity_type: String,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<f64>,
    pub notes: String,
}
