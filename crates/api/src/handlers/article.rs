//! Handlers for doctor-authored articles.

use axum::extract::State;
use axum::Json;
use glyco_core::types::DbId;
use glyco_core::validation::{is_present, require_present};
use glyco_db::models::article::ArticleWithAuthor;
use glyco_db::repositories::ArticleRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::require_id;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub doctor_id: Option<DbId>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// POST /articles
pub async fn create_article(
    State(state): State<AppState>,
    Json(input): Json<CreateArticleRequest>,
) -> AppResult<Json<MessageResponse>> {
    const REQUIRED: &str = "All fields required";
    require_present(
        &[is_present(&input.title), is_present(&input.content)],
        REQUIRED,
    )?;
    let doctor_id = require_id(input.doctor_id, REQUIRED)?;
    let title = input.title.unwrap_or_default();
    let content = input.content.unwrap_or_default();

    let article_id = ArticleRepo::create(&state.pool, doctor_id, &title, &content).await?;

    tracing::info!(article_id, doctor_id, "Article posted");

    Ok(Json(MessageResponse::new("Article posted")))
}

/// GET /articles
pub async fn list_articles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ArticleWithAuthor>>> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(Json(articles))
}
