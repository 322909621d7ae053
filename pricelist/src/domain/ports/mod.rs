//! Domain ports (traits)
//!
//! Adapters provide concrete implementations of these traits.

pub mod fetcher;

pub use fetcher::{FeedFetcher, FetchedResponse};
