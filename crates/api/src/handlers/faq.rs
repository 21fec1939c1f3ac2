//! Handlers for the FAQ board.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use glyco_core::validation::required;
use glyco_db::models::faq::FaqEntry;
use glyco_db::repositories::FaqRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::require_id;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub doctor_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerFaqRequest {
    pub answer: Option<String>,
    pub doctor_id: Option<DbId>,
}

/// POST /faqs
pub async fn create_faq(
    State(state): State<AppState>,
    Json(input): Json<CreateFaqRequest>,
) -> AppResult<Json<MessageResponse>> {
    let question = required(&input.question, "Question required")?;
    let answer = input.answer.as_deref().filter(|a| !a.trim().is_empty());

    let faq_id = FaqRepo::create(&state.pool, question, answer, input.doctor_id).await?;

    tracing::info!(faq_id, answered = answer.is_some(), "FAQ submitted");

    Ok(Json(MessageResponse::new("FAQ submitted")))
}

/// POST /faqs/answer/{id}
pub async fn answer_faq(
    State(state): State<AppState>,
    Path(faq_id): Path<DbId>,
    Json(input): Json<AnswerFaqRequest>,
) -> AppResult<Json<MessageResponse>> {
    const REQUIRED: &str = "Answer and doctor_id required";
    let answer = required(&input.answer, REQUIRED)?;
    let doctor_id = require_id(input.doctor_id, REQUIRED)?;

    if !FaqRepo::answer(&state.pool, faq_id, answer, doctor_id).await? {
        return Err(CoreError::NotFound {
            entity: "FAQ",
            id: faq_id,
        }
        .into());
    }

    tracing::info!(faq_id, doctor_id, "FAQ answered");

    Ok(Json(MessageResponse::new("FAQ answered")))
}

/// GET /faqs
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<Vec<FaqEntry>>> {
    let faqs = FaqRepo::list(&state.pool).await?;
    Ok(Json(faqs))
}
