//! Domain layer
//!
//! - `entities`: feed records and the response envelope
//! - `ports`: trait definitions for external dependencies

pub mod entities;
pub mod ports;
