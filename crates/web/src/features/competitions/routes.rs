use axum::{Router, routing::get};

use super::handlers::{get_competition_detail, list_competitions};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_competitions))
        .route("/:event_id", get(get_competition_detail))
}
