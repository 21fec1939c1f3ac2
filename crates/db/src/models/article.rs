//! Article models.

use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// An article joined with its author's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleWithAuthor {
    pub id: DbId,
    pub doctor_id: DbId,
    pub title: String,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub published_at: Timestamp,
    pub doctor_name: String,
}
