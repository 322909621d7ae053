//! Page layout
//!
//! The static page the price lists are mounted into.

use pricelist::{Document, SharedDocument};

pub const LEFT_LIST_ID: &str = "left";
pub const RIGHT_LIST_ID: &str = "right";

/// `<body><ul id="left"></ul><ul id="right"></ul></body>`
pub fn build_page() -> Result<SharedDocument, pricelist::DomError> {
    let mut doc = Document::new();
    let body = doc.body();

    for id in [LEFT_LIST_ID, RIGHT_LIST_ID] {
        let list = doc.create_element_with_id("ul", id);
        doc.append_child(body, list)?;
    }

    Ok(SharedDocument::new(doc))
}

/// Wrap the rendered body into a complete HTML document
pub fn to_html_page(document: &SharedDocument) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Price list</title></head>\n{}\n</html>\n",
        document.to_html()
    )
}
