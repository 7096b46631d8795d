use std::time::Duration;

use tracing::{info, warn};

use crate::config::CollectorConfig;
use crate::error::FetchError;

/// Something that can GET a page and hand back its body.
///
/// Implemented for `reqwest::Client`; a client is the session that is reused
/// across every fetch of one logical operation.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl Transport for reqwest::Client {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay after the given failed attempt (1-based): linear, 1x, 2x, ...
    pub fn backoff(&self, failed_attempt: u32) -> Duration {
        self.base_delay * failed_attempt
    }
}

pub fn build_client(config: &CollectorConfig) -> Result<reqwest::Client, FetchError> {
    Ok(reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.as_str())
        .build()?)
}

pub async fn fetch_with_retry<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    policy: &RetryPolicy,
) -> Result<String, FetchError> {
    let mut attempt = 1;

    loop {
        match transport.get_text(url).await {
            Ok(body) => {
                info!("Fetched {} bytes from {}", body.len(), url);
                return Ok(body);
            }
            Err(e) if e.is_transient() && attempt < policy.max_attempts => {
                let delay = policy.backoff(attempt);
                warn!(
                    "Retry {} for {} in {:?} after error: {}",
                    attempt, url, delay, e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// One-off fetch. Reuses `session` when given, otherwise builds a client
/// that lives only for this call.
pub async fn fetch_page(
    url: &str,
    session: Option<&dyn Transport>,
    config: &CollectorConfig,
) -> Result<String, FetchError> {
    let policy = config.retry_policy();
    match session {
        Some(session) => fetch_with_retry(session, url, &policy).await,
        None => {
            let client = build_client(config)?;
            fetch_with_retry(&client, url, &policy).await
        }
    }
}

/// Retrying page fetcher bound to one transport.
pub struct PageFetcher<T: Transport = reqwest::Client> {
    transport: T,
    policy: RetryPolicy,
}

impl PageFetcher<reqwest::Client> {
    pub fn new(config: &CollectorConfig) -> Result<Self, FetchError> {
        Ok(Self::with_transport(build_client(config)?, config.retry_policy()))
    }
}

impl<T: Transport> PageFetcher<T> {
    pub fn with_transport(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        fetch_with_retry(&self.transport, url, &self.policy).await
    }
}
