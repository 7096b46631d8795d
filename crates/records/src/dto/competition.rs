use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::models::Competition;

pub const DEFAULT_CATEGORY: &str = "WC";

/// Query filters for the competition listing.
///
/// The calendar is always fetched whole for one category; the remaining
/// filters are applied afterwards on the parsed rows.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompetitionFilter {
    /// Calendar category code (WC, WSC, OWG, ...). Defaults to WC.
    #[validate(custom(function = "validate_category_code"))]
    pub category: Option<String>,

    /// Gender code: M, W or BOTH. Matched exactly; an unknown code matches nothing.
    pub gender: Option<String>,

    /// Discipline code, e.g. GS. Matches competitions listing that discipline.
    pub discipline: Option<String>,

    /// Case-insensitive substring of the location.
    #[validate(length(min = 1, max = 100, message = "Location must be between 1 and 100 characters"))]
    pub location: Option<String>,
}

impl CompetitionFilter {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn matches(&self, competition: &Competition) -> bool {
        if let Some(ref gender) = self.gender
            && competition.gender.code() != gender.as_str()
        {
            return false;
        }

        if let Some(ref discipline) = self.discipline
            && !competition.discipline.iter().any(|d| d.code() == discipline.as_str())
        {
            return false;
        }

        if let Some(ref location) = self.location
            && !competition
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
        {
            return false;
        }

        true
    }

    pub fn apply(&self, competitions: Vec<Competition>) -> Vec<Competition> {
        competitions.into_iter().filter(|c| self.matches(c)).collect()
    }
}

fn validate_category_code(code: &str) -> Result<(), validator::ValidationError> {
    let is_valid = !code.is_empty()
        && code.len() <= 8
        && code.chars().all(|c| c.is_ascii_alphanumeric());

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_category_code"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Discipline, Gender, StatusFlags};

    fn competition(location: &str, gender: Gender, discipline: Vec<Discipline>) -> Competition {
        Competition {
            event_id: "1".to_string(),
            date: "26-27 Oct 2024".to_string(),
            location: location.to_string(),
            country: "AUT".to_string(),
            discipline,
            category: "WC".to_string(),
            gender,
            cancelled: false,
            status: StatusFlags::default(),
            url: None,
            is_live: false,
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CompetitionFilter::default();
        let kept = filter.apply(vec![
            competition("Soelden", Gender::Men, vec![Discipline::GiantSlalom]),
            competition("Levi", Gender::Women, vec![Discipline::Slalom]),
        ]);

        assert_eq!(kept.len(), 2);
        assert_eq!(filter.category(), "WC");
    }

    #[test]
    fn test_gender_is_exact_match() {
        let filter = CompetitionFilter {
            gender: Some("M".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&competition("Soelden", Gender::Men, vec![])));
        assert!(!filter.matches(&competition("Soelden", Gender::Both, vec![])));
    }

    #[test]
    fn test_unknown_or_lowercase_codes_match_nothing() {
        let lowercase_gender = CompetitionFilter {
            gender: Some("m".to_string()),
            ..Default::default()
        };
        let unknown_discipline = CompetitionFilter {
            discipline: Some("gs".to_string()),
            ..Default::default()
        };
        let soelden = competition("Soelden", Gender::Men, vec![Discipline::GiantSlalom]);

        assert!(!lowercase_gender.matches(&soelden));
        assert!(!unknown_discipline.matches(&soelden));
        assert!(lowercase_gender.validate().is_ok());
    }

    #[test]
    fn test_discipline_membership() {
        let filter = CompetitionFilter {
            discipline: Some("SL".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&competition(
            "Levi",
            Gender::Women,
            vec![Discipline::GiantSlalom, Discipline::Slalom]
        )));
        assert!(!filter.matches(&competition("Levi", Gender::Women, vec![Discipline::Downhill])));
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let filter = CompetitionFilter {
            location: Some("garmisch".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&competition(
            "Garmisch-Partenkirchen",
            Gender::Men,
            vec![]
        )));
        assert!(!filter.matches(&competition("Kitzbuehel", Gender::Men, vec![])));
    }

    #[test]
    fn test_validation() {
        let ok = CompetitionFilter {
            category: Some("WSC".to_string()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let bad = CompetitionFilter {
            category: Some("W C".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
