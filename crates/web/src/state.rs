use std::sync::Arc;
use std::time::Duration;

use collector::CompetitionSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CompetitionSource>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(source: Arc<dyn CompetitionSource>, request_timeout: Duration) -> Self {
        Self {
            source,
            request_timeout,
        }
    }
}
