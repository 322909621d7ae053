//! Document tree
//!
//! An arena of element and text nodes rooted at a `<body>` element. Nodes are
//! created detached and then placed with `append_child` / `insert_before`;
//! nothing is ever removed.

use std::fmt;

use crate::error::DomError;

use super::html;

/// Handle to a node of one `Document`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String, id: Option<String> },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            body: NodeId(0),
        };
        doc.body = doc.push(NodeKind::Element {
            tag: "body".to_string(),
            id: None,
        });
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_string(),
            id: None,
        })
    }

    /// Create an element carrying an `id` attribute (a mount point)
    pub fn create_element_with_id(&mut self, tag: &str, id: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_string(),
            id: Some(id.to_string()),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Append a detached node as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.ensure_element(parent)?;
        self.ensure_insertable(child, parent)?;

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Insert a detached node as the previous sibling of `reference`
    pub fn insert_before(&mut self, node: NodeId, reference: NodeId) -> Result<(), DomError> {
        let parent = self.parent(reference)?.ok_or(DomError::Detached(reference.0))?;
        self.ensure_insertable(node, parent)?;

        let siblings = &mut self.nodes[parent.0].children;
        let position = siblings
            .iter()
            .position(|&id| id == reference)
            .ok_or(DomError::Detached(reference.0))?;
        siblings.insert(position, node);
        self.nodes[node.0].parent = Some(parent);
        Ok(())
    }

    pub fn kind(&self, id: NodeId) -> Result<&NodeKind, DomError> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, DomError> {
        self.node(id).map(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        self.node(id).map(|n| n.children.as_slice())
    }

    pub fn previous_sibling(&self, id: NodeId) -> Result<Option<NodeId>, DomError> {
        let Some(parent) = self.parent(id)? else {
            return Ok(None);
        };
        let siblings = &self.nodes[parent.0].children;
        Ok(siblings
            .iter()
            .position(|&s| s == id)
            .and_then(|i| i.checked_sub(1))
            .map(|i| siblings[i]))
    }

    /// Tag name, `None` for text nodes and unknown ids
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            Ok(NodeKind::Element { tag, .. }) => Some(tag),
            _ => None,
        }
    }

    /// Concatenated text of the node and all its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut buf = String::new();
        self.collect_text(id, &mut buf);
        buf
    }

    /// First attached element with the given `id` attribute, in document order
    pub fn element_by_id(&self, wanted: &str) -> Option<NodeId> {
        let mut stack = vec![self.body];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.0];
            if let NodeKind::Element { id: Some(id), .. } = &node.kind {
                if id == wanted {
                    return Some(current);
                }
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    pub fn ensure_element(&self, id: NodeId) -> Result<(), DomError> {
        match self.kind(id)? {
            NodeKind::Element { .. } => Ok(()),
            NodeKind::Text(_) => Err(DomError::NotAnElement(id.0)),
        }
    }

    /// Serialise the node and its subtree to HTML
    pub fn to_html(&self, id: NodeId) -> String {
        let mut buf = String::new();
        self.write_html(id, &mut buf);
        buf
    }

    fn write_html(&self, id: NodeId, buf: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(text) => buf.push_str(&html::escape_text(text)),
            NodeKind::Element { tag, id: attr_id } => {
                html::open_tag(buf, tag, attr_id.as_deref());
                for &child in &node.children {
                    self.write_html(child, buf);
                }
                html::close_tag(buf, tag);
            }
        }
    }

    fn collect_text(&self, id: NodeId, buf: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(text) => buf.push_str(text),
            NodeKind::Element { .. } => {
                for &child in &node.children {
                    self.collect_text(child, buf);
                }
            }
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id.0))
    }

    /// `node` must be detached, not the body, and not an ancestor of `parent`
    fn ensure_insertable(&self, node: NodeId, parent: NodeId) -> Result<(), DomError> {
        if self.node(node)?.parent.is_some() || node == self.body {
            return Err(DomError::AlreadyAttached(node.0));
        }
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == node {
                return Err(DomError::Cycle(node.0));
            }
            cursor = self.nodes[current.0].parent;
        }
        Ok(())
    }
}
