use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One ranked line of a race results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RaceResult {
    pub athlete_id: String,
    pub rank: u32,
    pub name: String,
    pub nation: String,
    pub run1: Option<String>,
    pub run2: Option<String>,
    pub total: String,
    pub diff: String,
    pub fis_points: f64,
    pub cup_points: Option<u32>,
}
