//! Handlers for meals.

use axum::extract::{Path, State};
use axum::Json;
use glyco_core::error::CoreError;
use glyco_core::types::DbId;
use glyco_core::validation::{required, validate_non_negative};
use glyco_db::models::meal::{CreateMeal, Meal, DEFAULT_MEAL_TYPE};
use glyco_db::repositories::MealRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::require_id;
use crate::response::MessageResponse;
use crate::state::AppState;

const RECENT_LIMIT: i64 = 20;

/// Request body for `POST /meals`. Missing nutrients are stored as zero.
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub user_id: Option<DbId>,
    pub description: Option<String>,
    pub meal_type: Option<String>,
    pub calories: Option<f64>,
    pub carbs: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
}

/// POST /meals
pub async fn add_meal(
    State(state): State<AppState>,
    Json(input): Json<CreateMealRequest>,
) -> AppResult<Json<MessageResponse>> {
    const REQUIRED: &str = "user_id and description required";
    let user_id = require_id(input.user_id, REQUIRED)?;
    let description = required(&input.description, REQUIRED)?;

    validate_non_negative(input.calories, "calories")?;
    validate_non_negative(input.carbs, "carbs")?;
    validate_non_negative(input.protein, "protein")?;
    validate_non_negative(input.fat, "fat")?;

    let meal = MealRepo::create(
        &state.pool,
        &CreateMeal {
            user_id,
            description: description.to_string(),
            meal_type: input
                .meal_type
                .unwrap_or_else(|| DEFAULT_MEAL_TYPE.to_string()),
            calories: input.calories.unwrap_or(0.0),
            carbs: input.carbs.unwrap_or(0.0),
            protein: input.protein.unwrap_or(0.0),
            fat: input.fat.unwrap_or(0.0),
        },
    )
    .await?;

    tracing::info!(meal_id = meal.id, user_id, "Meal added");

    Ok(Json(MessageResponse::new("Meal added")))
}

/// GET /meals/{user_id}
pub async fn list_meals(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Meal>>> {
    let meals = MealRepo::list_recent(&state.pool, user_id, RECENT_LIMIT).await?;
    Ok(Json(meals))
}

/// DELETE /meals/{id}
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MealRepo::delete(&state.pool, meal_id).await? {
        return Err(CoreError::NotFound {
            entity: "Meal",
            id: meal_id,
        }
        .into());
    }
    tracing::info!(meal_id, "Meal deleted");
    Ok(Json(MessageResponse::new("Meal deleted")))
}
