//! Glucose log models.

use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// A row from the `glucose_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GlucoseLog {
    pub id: DbId,
    pub user_id: DbId,
    pub glucose_level: f64,
    pub context: String,
    pub category: String,
    #[serde(rename = "timestamp")]
    pub recorded_at: Timestamp,
}

/// DTO for inserting a classified reading.
#[derive(Debug)]
pub struct CreateGlucoseLog {
    pub user_id: DbId,
    pub glucose_level: f64,
    pub context: String,
    pub category: String,
}
