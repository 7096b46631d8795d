use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Discipline, Gender};

/// One row of the FIS alpine calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Competition {
    pub event_id: String,
    /// Display text as published, e.g. "26-27 Oct 2024".
    pub date: String,
    pub location: String,
    pub country: String,
    pub discipline: Vec<Discipline>,
    pub category: String,
    pub gender: Gender,
    pub cancelled: bool,
    pub status: StatusFlags,
    pub url: Option<String>,
    pub is_live: bool,
}

/// The four D/P/C/X badges shown next to each calendar row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusFlags {
    pub data_available: bool,
    pub pdf_available: bool,
    pub changes: bool,
    pub cancelled: bool,
}

impl StatusFlags {
    pub fn from_positions(selected: [bool; 4]) -> Self {
        let [data_available, pdf_available, changes, cancelled] = selected;
        Self {
            data_available,
            pdf_available,
            changes,
            cancelled,
        }
    }
}

impl Competition {
    pub fn has_discipline(&self, discipline: Discipline) -> bool {
        self.discipline.contains(&discipline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flags_serialize_as_mapping() {
        let flags = StatusFlags::from_positions([true, false, true, false]);
        let json = serde_json::to_value(flags).unwrap();

        assert_eq!(json["data_available"], true);
        assert_eq!(json["pdf_available"], false);
        assert_eq!(json["changes"], true);
        assert_eq!(json["cancelled"], false);
    }

    #[test]
    fn test_status_flags_from_positions() {
        let flags = StatusFlags::from_positions([false, false, false, true]);

        assert!(!flags.data_available);
        assert!(!flags.pdf_available);
        assert!(!flags.changes);
        assert!(flags.cancelled);
    }
}
