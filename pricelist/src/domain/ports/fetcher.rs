//! Feed fetcher port trait
//!
//! The single outbound network call of a render pass.

use async_trait::async_trait;

use crate::error::FeedError;

/// Raw response of one feed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    pub status: u16,
    pub body: String,
}

impl FetchedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches a feed resource
///
/// Implementations issue exactly one GET per call, with no retry and no
/// timeout. Any failure before a status line is received is reported as
/// `FeedError::Transport`; every received response is returned as-is,
/// whatever its status.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<FetchedResponse, FeedError>;
}
