//! Handlers for patient/doctor chat.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::notifications::{self, UNKNOWN_NAME};
use glyco_core::roles::ROLE_DOCTOR;
use glyco_core::types::DbId;
use glyco_core::validation::{is_present, require_present};
use glyco_db::models::message::Message;
use glyco_db::repositories::{MessageRepo, NotificationRepo, UserRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Messages returned by `GET /messages/{a}/{b}`.
const CONVERSATION_LIMIT: i64 = 40;

/// Request body for `POST /messages`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub sender_id: Option<DbId>,
    pub receiver_id: Option<DbId>,
    pub message: Option<String>,
}

/// POST /messages
///
/// Store the message and notify the receiver.
pub async fn send_message(
    State(state): State<AppState>,
    Json(input): Json<SendMessageRequest>,
) -> AppResult<Json<MessageResponse>> {
    const REQUIRED: &str = "All fields required";
    require_present(
        &[
            input.sender_id.is_some_and(|id| id > 0),
            input.receiver_id.is_some_and(|id| id > 0),
            is_present(&input.message),
        ],
        REQUIRED,
    )?;
    let (Some(sender_id), Some(receiver_id), Some(text)) =
        (input.sender_id, input.receiver_id, input.message)
    else {
        return Err(CoreError::Validation(REQUIRED.into()).into());
    };

    let mut tx = state.pool.begin().await?;

    let message = MessageRepo::create(&mut *tx, sender_id, receiver_id, &text).await?;

    let sender_name = UserRepo::find_name(&mut *tx, sender_id)
        .await?
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let receiver_is_doctor = UserRepo::find_role(&mut *tx, receiver_id)
        .await?
        .is_some_and(|role| role == ROLE_DOCTOR);

    let draft =
        notifications::message_received(receiver_id, receiver_is_doctor, &sender_name, &text);
    NotificationRepo::create(&mut *tx, &draft).await?;

    tx.commit().await?;

    tracing::info!(message_id = message.id, sender_id, receiver_id, "Message sent");

    Ok(Json(MessageResponse::new("Message sent")))
}

/// GET /messages/{user_a}/{user_b}
///
/// The latest messages between two users, in chronological order.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path((user_a, user_b)): Path<(DbId, DbId)>,
) -> AppResult<Json<Vec<Message>>> {
    let messages = MessageRepo::conversation(&state.pool, user_a, user_b, CONVERSATION_LIMIT).await?;
    Ok(Json(messages))
}
