use records::models::{Competition, CompetitionDetail};

use crate::Result;

/// A place competitions can be listed and looked up from.
#[async_trait::async_trait]
pub trait CompetitionSource: Send + Sync {
    /// Competitions of one category (`WC`, `WSC`, `OWG`, ...) for the
    /// configured season, in calendar order.
    async fn list_competitions(&self, category: &str) -> Result<Vec<Competition>>;

    async fn competition_detail(&self, event_id: &str) -> Result<CompetitionDetail>;
}
