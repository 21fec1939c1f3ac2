use axum::routing::get;
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /                          -> list_articles
/// POST   /                          -> create_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(article::list_articles).post(article::create_article),
    )
}
