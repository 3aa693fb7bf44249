use std::fmt::{self, Display, Formatter};

use tracing::debug;

use super::element::SchemaElement;
use crate::error::SchemaTreeError;

/// Node of the reconstructed schema tree. Leaves have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNode {
    pub element: SchemaElement,
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    pub fn new(element: SchemaElement) -> Self {
        Self {
            element,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.element.name
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pure structural group: no physical type, no annotation, declared children.
    pub fn is_struct(&self) -> bool {
        self.element.physical_type.is_none()
            && self.element.converted_type.is_none()
            && self.element.num_children.is_some()
    }

    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Look up a descendant by dotted path relative to this node.
    pub fn find(&self, path: &str) -> Option<&SchemaNode> {
        path.split('.')
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Dotted paths of every leaf below this node, in preorder. This node's own
    /// name is not part of the paths.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<(&SchemaNode, String)> = self
            .children
            .iter()
            .rev()
            .map(|c| (c, c.name().to_string()))
            .collect();
        while let Some((node, path)) = stack.pop() {
            if node.is_leaf() {
                out.push(path);
                continue;
            }
            for child in node.children.iter().rev() {
                stack.push((child, format!("{path}.{}", child.name())));
            }
        }
        out
    }

    /// Flatten back into preorder elements, the inverse of [`build_schema_tree`].
    pub fn to_elements(&self) -> Vec<SchemaElement> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.element.clone());
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

// Children are released through a work list so very deep trees do not
// exhaust the stack.
impl Drop for SchemaNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Display for SchemaNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = super::format_schema_tree(self)?;
        f.write_str(&text)
    }
}

/// Rebuild the nested tree from a flat preorder element list.
///
/// Uses an explicit stack of open groups, so arbitrarily deep schemas are
/// handled in one linear pass. Every element must be consumed exactly once.
pub fn build_schema_tree(
    elements: impl IntoIterator<Item = SchemaElement>,
) -> Result<SchemaNode, SchemaTreeError> {
    let mut elements = elements.into_iter();
    let root = elements.next().ok_or(SchemaTreeError::Empty)?;
    let mut consumed = 1usize;
    let mut stack = vec![SchemaNode::new(root)];
    let mut built = None;

    while let Some(node) = stack.pop() {
        let expected = node.element.num_children.unwrap_or(0);
        if node.children.len() < expected {
            let Some(element) = elements.next() else {
                return Err(SchemaTreeError::MissingElements {
                    parent: node.element.name.clone(),
                    expected,
                    found: node.children.len(),
                });
            };
            consumed += 1;
            stack.push(node);
            stack.push(SchemaNode::new(element));
            continue;
        }

        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => built = Some(node),
        }
    }

    let remaining = elements.count();
    if remaining > 0 {
        return Err(SchemaTreeError::TrailingElements {
            consumed,
            total: consumed + remaining,
        });
    }

    let root = built.ok_or(SchemaTreeError::Empty)?;
    debug!(elements = consumed, root = %root.name(), "built schema tree");
    Ok(root)
}
