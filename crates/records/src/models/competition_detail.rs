use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Broadcaster, Competition, Race, TechnicalDelegate};

/// Everything published on an event-details page, joined with the
/// calendar row of the same event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionDetail {
    pub competition: Option<Competition>,
    pub races: Vec<Race>,
    pub technical_delegates: Vec<TechnicalDelegate>,
    pub broadcasters: Vec<Broadcaster>,
    /// Document title (without the file size suffix) to download URL.
    pub documents: BTreeMap<String, String>,
}
