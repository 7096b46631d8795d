use std::future::Future;
use std::time::Duration;

use records::{
    dto::competition::CompetitionFilter,
    models::{Competition, CompetitionDetail},
};

use crate::error::{ApiResult, WebError};
use crate::state::AppState;

/// Calendar of the filter's category, narrowed by the remaining filters.
pub async fn list_competitions(
    state: &AppState,
    filter: &CompetitionFilter,
) -> ApiResult<Vec<Competition>> {
    let competitions = with_deadline(
        state.request_timeout,
        state.source.list_competitions(filter.category()),
    )
    .await?;

    Ok(filter.apply(competitions))
}

pub async fn get_competition_detail(
    state: &AppState,
    event_id: &str,
) -> ApiResult<CompetitionDetail> {
    with_deadline(state.request_timeout, state.source.competition_detail(event_id)).await
}

/// Dropping the lookup on timeout cancels every fetch still in flight.
async fn with_deadline<T>(
    deadline: Duration,
    lookup: impl Future<Output = collector::Result<T>>,
) -> ApiResult<T> {
    match tokio::time::timeout(deadline, lookup).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(WebError::Timeout),
    }
}
