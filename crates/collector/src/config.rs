use std::str::FromStr;
use std::time::Duration;

use crate::error::{CollectorError, Result};
use crate::fetcher::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "https://www.fis-ski.com";
pub const DEFAULT_SEASON_CODE: &str = "2025";

/// Upstream endpoints and fetch behavior, resolved once at startup.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub base_url: String,
    pub season_code: String,
    pub retry_base_delay: Duration,
    pub max_attempts: u32,
    pub request_timeout: Duration,
    pub results_concurrency: usize,
    pub user_agent: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            season_code: DEFAULT_SEASON_CODE.to_string(),
            retry_base_delay: Duration::from_secs(1),
            max_attempts: 3,
            request_timeout: Duration::from_secs(30),
            results_concurrency: 4,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".to_string(),
        }
    }
}

impl CollectorConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            base_url: std::env::var("FIS_BASE_URL").unwrap_or(defaults.base_url),
            season_code: std::env::var("FIS_SEASON_CODE").unwrap_or(defaults.season_code),
            retry_base_delay: Duration::from_millis(env_or("FETCH_RETRY_BASE_MS", 1000)?),
            max_attempts: defaults.max_attempts,
            request_timeout: Duration::from_secs(env_or("FETCH_TIMEOUT_SECS", 30)?),
            results_concurrency: env_or("RESULTS_CONCURRENCY", defaults.results_concurrency)?,
            user_agent: defaults.user_agent,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(CollectorError::InvalidConfig(format!(
                "base URL must be http(s), got '{}'",
                self.base_url
            )));
        }
        if self.season_code.is_empty() || !self.season_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(CollectorError::InvalidConfig(format!(
                "season code must be numeric, got '{}'",
                self.season_code
            )));
        }
        if self.results_concurrency == 0 {
            return Err(CollectorError::InvalidConfig(
                "RESULTS_CONCURRENCY must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: self.retry_base_delay,
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn calendar_url(&self, category_code: &str) -> String {
        format!(
            "{}/DB/alpine-skiing/calendar-results.html?sectorcode=AL&seasoncode={}&categorycode={}",
            self.base(),
            self.season_code,
            category_code
        )
    }

    pub fn event_url(&self, event_id: &str) -> String {
        format!(
            "{}/DB/general/event-details.html?sectorcode=AL&eventid={}&seasoncode={}",
            self.base(),
            event_id,
            self.season_code
        )
    }

    pub fn results_url(&self, race_id: &str) -> String {
        format!(
            "{}/DB/general/results.html?sectorcode=AL&raceid={}",
            self.base(),
            race_id
        )
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CollectorError::InvalidConfig(format!("{} has an invalid value: '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}
