use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::FetchError;
use crate::fetcher::Transport;

/// Transport that replays queued responses per URL and counts calls.
///
/// The last queued response for a URL is repeated once the queue drains.
/// Unknown URLs answer with a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<String, VecDeque<Result<String, FetchError>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, url: impl Into<String>, response: Result<String, FetchError>) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.into())
            .or_default()
            .push_back(response);
    }

    pub fn page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.push(url, Ok(body.into()));
        self
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    pub fn all_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn replay(response: &Result<String, FetchError>) -> Result<String, FetchError> {
    match response {
        Ok(body) => Ok(body.clone()),
        Err(FetchError::Status { status, url }) => Err(FetchError::Status {
            status: *status,
            url: url.clone(),
        }),
        Err(FetchError::InvalidUrl { url, reason }) => Err(FetchError::InvalidUrl {
            url: url.clone(),
            reason: reason.clone(),
        }),
        Err(FetchError::Request(e)) => panic!("cannot replay reqwest error: {e}"),
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        match responses.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if queue.len() == 1 => replay(&queue[0]),
            _ => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}
