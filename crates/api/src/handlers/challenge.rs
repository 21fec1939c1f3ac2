//! Handlers for community challenges.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use glyco_core::validation::{is_present, parse_date, require_present, validate_date_range};
use glyco_db::models::challenge::{ChallengeWithCreator, CreateChallenge};
use glyco_db::repositories::ChallengeRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::require_id;
use crate::response::MessageResponse;
use crate::state::AppState;

const REQUIRED: &str = "All fields required";

#[derive(Debug, Deserialize)]
pub struct CreateChallengeRequest {
    pub creator_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Request body for `POST /challenges/join` and `POST /challenges/leave`.
#[derive(Debug, Deserialize)]
pub struct ParticipationRequest {
    pub challenge_id: Option<DbId>,
    pub user_id: Option<DbId>,
}

impl ParticipationRequest {
    fn ids(&self) -> Result<(DbId, DbId), CoreError> {
        Ok((
            require_id(self.challenge_id, REQUIRED)?,
            require_id(self.user_id, REQUIRED)?,
        ))
    }
}

/// POST /challenges
pub async fn create_challenge(
    State(state): State<AppState>,
    Json(input): Json<CreateChallengeRequest>,
) -> AppResult<Json<MessageResponse>> {
    require_present(
        &[
            is_present(&input.title),
            is_present(&input.description),
            is_present(&input.start_date),
            is_present(&input.end_date),
        ],
        REQUIRED,
    )?;
    let creator_id = require_id(input.creator_id, REQUIRED)?;

    let start_date = parse_date(input.start_date.as_deref().unwrap_or_default(), "start_date")?;
    let end_date = parse_date(input.end_date.as_deref().unwrap_or_default(), "end_date")?;
    validate_date_range(start_date, end_date)?;

    let challenge_id = ChallengeRepo::create(
        &state.pool,
        &CreateChallenge {
            creator_id,
            title: input.title.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            start_date,
            end_date,
        },
    )
    .await?;

    tracing::info!(challenge_id, creator_id, "Challenge created");

    Ok(Json(MessageResponse::new("Challenge created")))
}

/// POST /challenges/join
///
/// Joining a challenge twice is not an error.
pub async fn join_challenge(
    State(state): State<AppState>,
    Json(input): Json<ParticipationRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (challenge_id, user_id) = input.ids()?;
    let joined = ChallengeRepo::join(&state.pool, challenge_id, user_id).await?;
    tracing::info!(challenge_id, user_id, newly_joined = joined, "Joined challenge");
    Ok(Json(MessageResponse::new("Joined challenge")))
}

/// POST /challenges/leave
pub async fn leave_challenge(
    State(state): State<AppState>,
    Json(input): Json<ParticipationRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (challenge_id, user_id) = input.ids()?;
    let left = ChallengeRepo::leave(&state.pool, challenge_id, user_id).await?;
    tracing::info!(challenge_id, user_id, was_participant = left, "Left challenge");
    Ok(Json(MessageResponse::new("Left challenge")))
}

/// GET /challenges
pub async fn list_challenges(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ChallengeWithCreator>>> {
    let challenges = ChallengeRepo::list(&state.pool).await?;
    Ok(Json(challenges))
}

/// GET /challenges/user/{user_id}
pub async fn list_user_challenges(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<ChallengeWithCreator>>> {
    let challenges = ChallengeRepo::list_joined(&state.pool, user_id).await?;
    Ok(Json(challenges))
}
