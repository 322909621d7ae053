//! Shared document handle and render targets

use std::sync::{Arc, Mutex, PoisonError};

use super::{Document, NodeId};

/// A document shared between the page and any number of render tasks
///
/// Each mutation batch takes the lock once; the lock is never held across
/// an `.await`.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<Mutex<Document>>,
}

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(Mutex::new(document)),
        }
    }

    /// Run `f` with exclusive access to the document
    pub fn with<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        // Poison is ignored: nodes are only linked after every check passed.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn to_html(&self) -> String {
        self.with(|doc| doc.to_html(doc.body()))
    }

    /// Mount point handle for an existing node
    pub fn target(&self, node: NodeId) -> RenderTarget {
        RenderTarget {
            document: self.clone(),
            node,
        }
    }

    /// Mount point handle for the attached element with the given id
    pub fn target_by_id(&self, id: &str) -> Option<RenderTarget> {
        self.with(|doc| doc.element_by_id(id))
            .map(|node| self.target(node))
    }
}

/// An externally owned mount point
///
/// The renderer appends to it and inserts error notes before it, but never
/// clears or replaces it.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    document: SharedDocument,
    node: NodeId,
}

impl RenderTarget {
    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}
