//! Repository for the `meals` table.

use sqlx::PgPool;
use glyco_core::types::DbId;

use crate::models::meal::{CreateMeal, Meal};

const COLUMNS: &str = "id, user_id, description, meal_type, calories, carbs, protein, fat, \
                       recorded_at";

pub struct MealRepo;

impl MealRepo {
    pub async fn create(pool: &PgPool, input: &CreateMeal) -> Result<Meal, sqlx::Error> {
        let query = format!(
            "INSERT INTO meals (user_id, description, meal_type, calories, carbs, protein, fat)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(input.user_id)
            .bind(&input.description)
            .bind(&input.meal_type)
            .bind(input.calories)
            .bind(input.carbs)
            .bind(input.protein)
            .bind(input.fat)
            .fetch_one(pool)
            .await
    }

    /// Most recent meals first.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Meal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meals
             WHERE user_id = $1
             ORDER BY recorded_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
