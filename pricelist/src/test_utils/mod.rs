//! Test utilities
//!
//! Manual mocks and fixtures, same policy as the rest of the crate: no mock
//! macros, every mock is a small explicit in-memory implementation.

pub mod backend;
pub mod fixtures;
pub mod mocks;

pub use backend::*;
pub use fixtures::*;
pub use mocks::*;
