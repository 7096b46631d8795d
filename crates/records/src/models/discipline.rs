use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::RecordsError;

/// Alpine discipline as published on the FIS calendar and event pages.
///
/// Serialized with the short wire code (`SL`, `GS`, ...). The upper snake case
/// name returned by [`Discipline::name`] is what event-detail labels normalize to
/// ("Giant Slalom Training" -> `GIANT_SLALOM_TRAINING`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Discipline {
    #[serde(rename = "SL")]
    Slalom,
    #[serde(rename = "GS")]
    GiantSlalom,
    #[serde(rename = "SG")]
    SuperG,
    #[serde(rename = "DH")]
    Downhill,
    #[serde(rename = "SLT")]
    SlalomTraining,
    #[serde(rename = "GST")]
    GiantSlalomTraining,
    #[serde(rename = "SGT")]
    SuperGTraining,
    #[serde(rename = "DHT")]
    DownhillTraining,
    #[serde(rename = "TCOM")]
    TeamCombined,
    #[serde(rename = "PAR")]
    TeamParallel,
}

impl Discipline {
    /// Codes the calendar's discipline column is scanned for, in scan order.
    pub const CALENDAR_VOCABULARY: [Discipline; 4] =
        [Self::Slalom, Self::GiantSlalom, Self::SuperG, Self::Downhill];

    pub fn all() -> &'static [Discipline] {
        &[
            Self::Slalom,
            Self::GiantSlalom,
            Self::SuperG,
            Self::Downhill,
            Self::SlalomTraining,
            Self::GiantSlalomTraining,
            Self::SuperGTraining,
            Self::DownhillTraining,
            Self::TeamCombined,
            Self::TeamParallel,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Slalom => "SL",
            Self::GiantSlalom => "GS",
            Self::SuperG => "SG",
            Self::Downhill => "DH",
            Self::SlalomTraining => "SLT",
            Self::GiantSlalomTraining => "GST",
            Self::SuperGTraining => "SGT",
            Self::DownhillTraining => "DHT",
            Self::TeamCombined => "TCOM",
            Self::TeamParallel => "PAR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Slalom => "SLALOM",
            Self::GiantSlalom => "GIANT_SLALOM",
            Self::SuperG => "SUPER_G",
            Self::Downhill => "DOWNHILL",
            Self::SlalomTraining => "SLALOM_TRAINING",
            Self::GiantSlalomTraining => "GIANT_SLALOM_TRAINING",
            Self::SuperGTraining => "SUPER_G_TRAINING",
            Self::DownhillTraining => "DOWNHILL_TRAINING",
            Self::TeamCombined => "TEAM_COMBINED",
            Self::TeamParallel => "TEAM_PARALLEL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.code() == code)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.name() == name)
    }

    /// Matches a display label such as "Super G" or "Slalom Training" against
    /// the enum names after replacing spaces with underscores and uppercasing.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_name(&label.trim().replace(' ', "_").to_uppercase())
    }

    pub fn is_training(&self) -> bool {
        matches!(
            self,
            Self::SlalomTraining
                | Self::GiantSlalomTraining
                | Self::SuperGTraining
                | Self::DownhillTraining
        )
    }

    /// Team events publish no individual results table.
    pub fn is_team_event(&self) -> bool {
        matches!(self, Self::TeamCombined | Self::TeamParallel)
    }

    pub fn has_two_runs(&self) -> bool {
        matches!(self, Self::Slalom | Self::GiantSlalom)
    }
}

impl std::str::FromStr for Discipline {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::from_code(&normalized)
            .or_else(|| Self::from_name(&normalized))
            .ok_or_else(|| RecordsError::UnknownDiscipline(s.to_string()))
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping_is_bidirectional() {
        for discipline in Discipline::all() {
            assert_eq!(Discipline::from_code(discipline.code()), Some(*discipline));
            assert_eq!(Discipline::from_name(discipline.name()), Some(*discipline));
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Discipline::from_label("Giant Slalom"), Some(Discipline::GiantSlalom));
        assert_eq!(Discipline::from_label("Super G"), Some(Discipline::SuperG));
        assert_eq!(
            Discipline::from_label("Downhill Training"),
            Some(Discipline::DownhillTraining)
        );
        assert_eq!(Discipline::from_label("Team Parallel"), Some(Discipline::TeamParallel));
        assert_eq!(Discipline::from_label("Alpine Combined"), None);
        assert_eq!(Discipline::from_label(""), None);
    }

    #[test]
    fn test_parse_accepts_codes_and_names() {
        assert_eq!("gs".parse::<Discipline>().unwrap(), Discipline::GiantSlalom);
        assert_eq!("DOWNHILL".parse::<Discipline>().unwrap(), Discipline::Downhill);
        assert!("XX".parse::<Discipline>().is_err());
    }

    #[test]
    fn test_flags() {
        assert!(Discipline::Slalom.has_two_runs());
        assert!(Discipline::GiantSlalom.has_two_runs());
        assert!(!Discipline::SuperG.has_two_runs());
        assert!(Discipline::DownhillTraining.is_training());
        assert!(!Discipline::Downhill.is_training());
        assert!(Discipline::TeamCombined.is_team_event());
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Discipline::SuperG).unwrap();
        assert_eq!(json, "\"SG\"");
        let back: Discipline = serde_json::from_str("\"DHT\"").unwrap();
        assert_eq!(back, Discipline::DownhillTraining);
    }
}
