use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectorError>;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Competition not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CollectorError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Failure to retrieve a page, after retries where they apply.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {url}")]
    Status { status: u16, url: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    /// Network and HTTP status failures are worth another attempt; a URL or
    /// client that cannot be built never is.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(e) => !e.is_builder(),
            Self::Status { .. } => true,
            Self::InvalidUrl { .. } => false,
        }
    }
}

/// A structurally required piece of markup was missing or unreadable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("No element matches '{0}'")]
    MissingElement(String),

    #[error("Attribute '{attribute}' missing on '{selector}'")]
    MissingAttribute { selector: String, attribute: String },

    #[error("Expected at least {expected} elements for '{selector}', found {found}")]
    TooFewElements {
        selector: String,
        expected: usize,
        found: usize,
    },

    #[error("Column {0} missing from result row")]
    MissingColumn(usize),

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("Unknown discipline: '{0}'")]
    UnknownDiscipline(String),
}

impl ExtractionError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
