//! Error types for the pricelist crate
//!
//! - `FeedError`: everything that can go wrong while rendering one feed
//! - `DomError`: structural errors from the document tree
//! - `ClientError`: construction errors of the HTTP adapter

use thiserror::Error;

/// Failure of a single feed render pass.
///
/// Every variant is caught at the `render` boundary and turned into an
/// error note in the document; none of them propagate further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The request never reached a server (DNS, refused connection, bad URL...)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("HTTP error, status = {status}{}", detail_suffix(.detail))]
    HttpStatus {
        status: u16,
        detail: Option<String>,
    },

    /// The body is not JSON or does not have the feed envelope shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The mount point handed to the renderer is unusable
    #[error("Invalid render target: {0}")]
    Target(#[from] DomError),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default()
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Transport(e.to_string())
    }
}

/// Document tree errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0} does not belong to this document")]
    UnknownNode(usize),

    #[error("node {0} is not an element")]
    NotAnElement(usize),

    #[error("node {0} has no parent")]
    Detached(usize),

    #[error("node {0} is already attached")]
    AlreadyAttached(usize),

    #[error("node {0} cannot be placed inside its own subtree")]
    Cycle(usize),
}

/// HTTP adapter construction errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid page URL {url:?}: {message}")]
    InvalidPageUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
