mod calendar;
mod event_details;
mod results;

pub use calendar::{parse_calendar, parse_competition_row};
pub use event_details::{EventPage, parse_event_page, parse_race};
pub use results::{ColumnLayout, parse_result_row, parse_results};

use futures::{StreamExt, TryStreamExt, stream};
use records::models::{Competition, CompetitionDetail, Discipline, Race, RaceResult};
use tracing::{debug, info};

use crate::config::CollectorConfig;
use crate::error::{CollectorError, Result};
use crate::fetcher::{PageFetcher, Transport, build_client};
use crate::report::ParseReport;
use crate::traits::CompetitionSource;

/// Category listings searched, in order, for the calendar row of an event.
pub const RESOLVE_CATEGORIES: [&str; 3] = ["WC", "WSC", "OWG"];

/// Scraper for the public FIS alpine calendar, event and results pages.
///
/// Every fetch of one collector goes through the same session, so a detail
/// lookup reuses one connection pool for the event page, its results pages
/// and the calendar listings.
pub struct FisCollector<T: Transport = reqwest::Client> {
    fetcher: PageFetcher<T>,
    config: CollectorConfig,
}

impl FisCollector<reqwest::Client> {
    pub fn new(config: CollectorConfig) -> Result<Self> {
        config.validate()?;
        let client = build_client(&config)?;
        Ok(Self::with_session(client, config))
    }

    pub fn with_session(client: reqwest::Client, config: CollectorConfig) -> Self {
        Self::with_transport(client, config)
    }
}

impl<T: Transport> FisCollector<T> {
    pub fn with_transport(transport: T, config: CollectorConfig) -> Self {
        Self {
            fetcher: PageFetcher::with_transport(transport, config.retry_policy()),
            config,
        }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &PageFetcher<T> {
        &self.fetcher
    }

    pub async fn list_competitions(&self, category: &str) -> Result<Vec<Competition>> {
        let url = self.config.calendar_url(category);
        let html = self.fetcher.fetch(&url).await?;

        let parsed = parse_calendar(&html);
        log_report("calendar", category, &parsed.report);
        info!(
            "Parsed {} competitions from the {} calendar",
            parsed.items.len(),
            category
        );

        Ok(parsed.items)
    }

    /// Results of one race; `None` for team events and for tables that are
    /// not published yet.
    pub async fn results(
        &self,
        race_id: &str,
        discipline: Discipline,
    ) -> Result<Option<Vec<RaceResult>>> {
        if discipline.is_team_event() {
            debug!("No results table for team event race {}", race_id);
            return Ok(None);
        }

        let html = self.fetcher.fetch(&self.config.results_url(race_id)).await?;

        Ok(parse_results(&html, discipline).map(|parsed| {
            log_report("results", race_id, &parsed.report);
            parsed.items
        }))
    }

    pub async fn competition_detail(&self, event_id: &str) -> Result<CompetitionDetail> {
        let html = self.fetcher.fetch(&self.config.event_url(event_id)).await?;
        let page = parse_event_page(&html, event_id)?;
        log_report("event", event_id, &page.report);

        let races = self.attach_results(page.races).await?;
        let competition = self.resolve_competition(event_id).await?;

        Ok(CompetitionDetail {
            competition: Some(competition),
            races,
            technical_delegates: page.technical_delegates,
            broadcasters: page.broadcasters,
            documents: page.documents,
        })
    }

    /// Fetches results for every non-training race with a known race id.
    /// Fetches run concurrently up to the configured limit; race order is kept.
    async fn attach_results(&self, races: Vec<Race>) -> Result<Vec<Race>> {
        stream::iter(races)
            .map(|mut race| async move {
                if !race.is_training
                    && let Some(race_id) = race.race_id.as_deref()
                {
                    race.results = self.results(race_id, race.discipline).await?;
                }
                Ok::<_, CollectorError>(race)
            })
            .buffered(self.config.results_concurrency)
            .try_collect()
            .await
    }

    /// First calendar row with this event id across [`RESOLVE_CATEGORIES`].
    pub async fn resolve_competition(&self, event_id: &str) -> Result<Competition> {
        for category in RESOLVE_CATEGORIES {
            let competitions = self.list_competitions(category).await?;
            if let Some(competition) = competitions.into_iter().find(|c| c.event_id == event_id) {
                debug!("Resolved event {} in the {} calendar", event_id, category);
                return Ok(competition);
            }
        }

        Err(CollectorError::NotFound(event_id.to_string()))
    }
}

fn log_report(page: &str, key: &str, report: &ParseReport) {
    if !report.is_clean() {
        info!(
            "{} page {} parsed with {} skipped rows",
            page,
            key,
            report.skipped.len()
        );
    }
}

#[async_trait::async_trait]
impl<T: Transport> CompetitionSource for FisCollector<T> {
    async fn list_competitions(&self, category: &str) -> Result<Vec<Competition>> {
        Self::list_competitions(self, category).await
    }

    async fn competition_detail(&self, event_id: &str) -> Result<CompetitionDetail> {
        Self::competition_detail(self, event_id).await
    }
}
