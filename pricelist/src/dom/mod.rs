//! Document model
//!
//! A small DOM stand-in: the page owns a `Document`, feeds render into
//! mount points of it through `RenderTarget` handles.

pub mod document;
pub mod html;
pub mod target;

pub use document::{Document, NodeId, NodeKind};
pub use target::{RenderTarget, SharedDocument};
