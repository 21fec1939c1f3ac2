//! FAQ models.

use serde::Serialize;
use sqlx::FromRow;
use glyco_core::types::{DbId, Timestamp};

/// A FAQ entry with the answering doctor's name, if answered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FaqEntry {
    pub id: DbId,
    pub question: String,
    pub answer: Option<String>,
    pub doctor_id: Option<DbId>,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
    pub doctor_name: Option<String>,
}
