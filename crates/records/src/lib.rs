pub mod dto;
pub mod error;
pub mod models;

pub use error::RecordsError;
