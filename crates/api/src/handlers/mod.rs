//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate loosely-typed JSON input, delegate to the corresponding
//! repository in `glyco_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod activity;
pub mod appointment;
pub mod article;
pub mod auth;
pub mod challenge;
pub mod doctor;
pub mod faq;
pub mod glucose;
pub mod meal;
pub mod medication;
pub mod message;
pub mod notification;
pub mod profile;
pub mod reminder;

use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Require an ID field, failing with `message` when it is absent or not positive.
pub(crate) fn require_id(value: Option<DbId>, message: &str) -> Result<DbId, CoreError> {
    value
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::Validation(message.to_string()))
}

/// Deserialize a typed view of a JSON body that was accepted as a raw value.
pub(crate) fn from_body<T: DeserializeOwned>(body: &serde_json::Value) -> Result<T, AppError> {
    serde_json::from_value(body.clone())
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}
