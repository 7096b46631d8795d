pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod fragment;
pub mod report;
pub mod sources;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use config::CollectorConfig;
pub use error::{CollectorError, ExtractionError, FetchError, Result};
pub use fetcher::{PageFetcher, RetryPolicy, Transport, fetch_page};
pub use fragment::Fragment;
pub use report::{ParseReport, Parsed};
pub use sources::fis::FisCollector;
pub use traits::CompetitionSource;
