use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Discipline, Gender, RaceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Race {
    pub race_id: Option<String>,
    pub codex: String,
    #[schema(value_type = String, example = "2024-10-26T10:00:00")]
    pub date: RaceDate,
    pub discipline: Discipline,
    pub is_training: bool,
    pub gender: Gender,
    pub runs: Vec<Run>,
    pub has_live_timing: bool,
    pub live_timing_url: Option<String>,
    /// `None` for training races, team events and races without a published table.
    pub results: Option<Vec<RaceResult>>,
}

/// Start date of a race; the time of day is only known once the
/// organiser publishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RaceDate {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Run {
    pub number: u8,
    #[schema(value_type = String, example = "10:00:00")]
    pub time: NaiveTime,
    pub status: Option<String>,
    pub info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_date_serializes_untagged() {
        let day = NaiveDate::from_ymd_opt(2024, 10, 26).unwrap();

        assert_eq!(
            serde_json::to_string(&RaceDate::Date(day)).unwrap(),
            "\"2024-10-26\""
        );
        assert_eq!(
            serde_json::to_string(&RaceDate::DateTime(day.and_hms_opt(13, 30, 0).unwrap()))
                .unwrap(),
            "\"2024-10-26T13:30:00\""
        );
    }
}
