//! Meal models.

use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// Default `meal_type` when the client sends none.
pub const DEFAULT_MEAL_TYPE: &str = "other";

/// A row from the `meals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meal {
    pub id: DbId,
    pub user_id: DbId,
    pub description: String,
    pub meal_type: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    #[serde(rename = "timestamp")]
    pub recorded_at: Timestamp,
}

/// DTO for creating a meal. Missing nutrients are stored as zero.
#[derive(Debug)]
pub struct CreateMeal {
    pub user_id: DbId,
    pub description: String,
    pub meal_type: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}
