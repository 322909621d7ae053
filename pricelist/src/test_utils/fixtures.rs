//! Test fixtures
//!
//! Factory functions for feed payloads and pages with mount points.

use crate::dom::{Document, RenderTarget, SharedDocument};
use crate::domain::entities::{FeedResponse, ProductRecord};

/// The single-record feed used throughout the renderer tests
pub const OAK_PLANK_FEED: &str =
    r#"{"value":[{"name":"Oak Plank","cost":150,"matherial_group":"Wood"}]}"#;

/// Create a record with every field set
pub fn test_record(name: &str, cost: i64, group: &str) -> ProductRecord {
    ProductRecord {
        name: Some(name.to_string()),
        cost: Some(cost.to_string()),
        matherial_group: Some(group.to_string()),
    }
}

/// Serialise records into the backend envelope
pub fn feed_json(records: &[ProductRecord]) -> String {
    serde_json::to_string(&FeedResponse {
        value: records.to_vec(),
        error: String::new(),
    })
    .unwrap()
}

/// A page with two lists, `ul#left` and `ul#right`
pub struct TestPage {
    pub document: SharedDocument,
    pub left: RenderTarget,
    pub right: RenderTarget,
}

pub fn test_page() -> TestPage {
    let mut doc = Document::new();
    let body = doc.body();
    let left = doc.create_element_with_id("ul", "left");
    let right = doc.create_element_with_id("ul", "right");
    doc.append_child(body, left).unwrap();
    doc.append_child(body, right).unwrap();

    let document = SharedDocument::new(doc);
    TestPage {
        left: document.target(left),
        right: document.target(right),
        document,
    }
}
