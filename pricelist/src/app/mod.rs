//! Application layer
//!
//! Use cases built on top of the domain ports.

pub mod list_feed_renderer;

pub use list_feed_renderer::{ListFeedRenderer, RenderHandle, RenderOutcome};
