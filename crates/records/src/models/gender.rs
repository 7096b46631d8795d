use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::RecordsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "M")]
    Men,
    #[serde(rename = "W")]
    Women,
    #[serde(rename = "BOTH")]
    Both,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Men => "M",
            Self::Women => "W",
            Self::Both => "BOTH",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Men),
            "W" => Some(Self::Women),
            "BOTH" => Some(Self::Both),
            _ => None,
        }
    }

    /// Combines the two gender markers found on a calendar row.
    ///
    /// A row carrying neither marker resolves to `Women`, which is what the
    /// calendar scraper has always produced.
    pub fn from_markers(has_men: bool, has_women: bool) -> Self {
        match (has_men, has_women) {
            (true, true) => Self::Both,
            (true, false) => Self::Men,
            _ => Self::Women,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_uppercase())
            .ok_or_else(|| RecordsError::UnknownGender(s.to_string()))
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
