//! Domain entities

pub mod product;

pub use product::{FeedResponse, ProductRecord};
