use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordsError {
    #[error("Unknown discipline code: {0}")]
    UnknownDiscipline(String),

    #[error("Unknown gender code: {0}")]
    UnknownGender(String),
}
