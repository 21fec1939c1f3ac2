use axum::routing::{get, post};
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
///
/// ```text
/// GET    /                          -> list_faqs
/// POST   /                          -> create_faq
/// POST   /answer/{id}               -> answer_faq
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faq::list_faqs).post(faq::create_faq))
        .route("/answer/{id}", post(faq::answer_faq))
}
