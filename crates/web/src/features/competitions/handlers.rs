use axum::{
    Json,
    extract::{Path, Query, State},
};
use records::{
    dto::competition::CompetitionFilter,
    models::{Competition, CompetitionDetail},
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/v1/competitions",
    params(CompetitionFilter),
    responses(
        (status = 200, description = "Competitions of the requested calendar", body = Vec<Competition>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Upstream page could not be fetched")
    ),
    tag = "competitions"
)]
pub async fn list_competitions(
    State(state): State<AppState>,
    Query(filter): Query<CompetitionFilter>,
) -> Result<Json<Vec<Competition>>, WebError> {
    filter.validate()?;

    let competitions = services::list_competitions(&state, &filter).await?;

    Ok(Json(competitions))
}

#[utoipa::path(
    get,
    path = "/api/v1/competitions/{event_id}",
    params(
        ("event_id" = String, Path, description = "FIS event id")
    ),
    responses(
        (status = 200, description = "Competition found", body = CompetitionDetail),
        (status = 404, description = "Competition not found"),
        (status = 500, description = "Upstream page could not be fetched")
    ),
    tag = "competitions"
)]
pub async fn get_competition_detail(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<CompetitionDetail>, WebError> {
    let detail = services::get_competition_detail(&state, &event_id).await?;

    Ok(Json(detail))
}
