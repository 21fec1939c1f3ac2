//! Challenge models.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// A challenge joined with its creator's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChallengeWithCreator {
    pub id: DbId,
    pub creator_id: DbId,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: Timestamp,
    pub creator_name: String,
}

/// DTO for creating a challenge. Dates are already validated.
#[derive(Debug)]
pub struct CreateChallenge {
    pub creator_id: DbId,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
