//! Mock implementations of port traits

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::ports::{FeedFetcher, FetchedResponse};
use crate::error::FeedError;

// ============================================================================
// In-Memory Feed Fetcher
// ============================================================================

/// Serves canned responses by locator; anything unknown is a 404
#[derive(Default)]
pub struct MockFeedFetcher {
    responses: Arc<RwLock<HashMap<String, Result<FetchedResponse, FeedError>>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFeedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 with the given body
    pub fn with_ok(self, locator: &str, body: &str) -> Self {
        self.with_response(locator, FetchedResponse::new(200, body))
    }

    pub fn with_response(self, locator: &str, response: FetchedResponse) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(locator.to_string(), Ok(response));
        self
    }

    pub fn with_error(self, locator: &str, error: FeedError) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(locator.to_string(), Err(error));
        self
    }

    /// Hold the response for `delay` before answering
    pub fn with_delay(self, locator: &str, delay: Duration) -> Self {
        self.delays
            .write()
            .unwrap()
            .insert(locator.to_string(), delay);
        self
    }

    /// Locators requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedFetcher for MockFeedFetcher {
    async fn fetch(&self, locator: &str) -> Result<FetchedResponse, FeedError> {
        self.calls.write().unwrap().push(locator.to_string());

        let delay = self.delays.read().unwrap().get(locator).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .read()
            .unwrap()
            .get(locator)
            .cloned()
            .unwrap_or_else(|| Ok(FetchedResponse::new(404, "404 page not found\n")))
    }
}
