//! HTTP adapter
//!
//! reqwest implementation of the feed fetcher.

pub mod client;

pub use client::HttpFeedFetcher;
