//! Pricelist
//!
//! Renders remote catalogue feeds (materials, products) as HTML lists.
//!
//! - `domain`: feed entities and the fetcher port
//! - `adapters`: reqwest implementation of the port
//! - `dom`: the document the lists live in
//! - `app`: the list feed renderer

pub mod adapters;
pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

pub use adapters::HttpFeedFetcher;
pub use app::{ListFeedRenderer, RenderHandle, RenderOutcome};
pub use config::Config;
pub use dom::{Document, NodeId, RenderTarget, SharedDocument};
pub use domain::entities::{FeedResponse, ProductRecord};
pub use domain::ports::{FeedFetcher, FetchedResponse};
pub use error::{ClientError, DomError, FeedError};
