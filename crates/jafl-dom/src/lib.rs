//! Element tree for the JAFL converter.
//!
//! # Design
//!
//! The tree uses arena allocation with [`ElementId`] indices for all
//! relationships. The parser never holds references into the tree: when an
//! element closes, its rendered fragment is copied into the parent's
//! `content` as a plain `String`, so no node ever owns another.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Map of attribute names to values for an element.
///
/// Ordered by key so that generic serialization is deterministic.
pub type AttributesMap = BTreeMap<String, String>;

/// A type-safe index into the [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub usize);

/// One parsed tag instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag identifier, e.g. `section` or `choice`.
    pub name: String,
    /// Attribute name → value. Keys are unique; a repeated attribute keeps
    /// the last value read.
    pub attributes: AttributesMap,
    /// Literal text and rendered child fragments, in document order.
    pub content: String,
}

impl Element {
    /// Create an element with no attributes and no content.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: AttributesMap::new(),
            content: String::new(),
        }
    }

    /// Builder-style attribute setter, mostly useful in tests.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style content setter.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Look up an attribute value, treating a missing attribute as `""`.
    #[must_use]
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or_default()
    }

    /// Whether the element has any non-whitespace literal content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Generic serialization used for tags without a dedicated rendering rule.
///
/// The opening tag reproduces every attribute (in key order), so unknown
/// markup survives the conversion instead of being dropped.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{value}\"")?;
        }
        write!(f, ">\n\t{}\n</{}>", self.content, self.name)
    }
}

/// A node in the arena: the element plus its tree links.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// The element data.
    pub element: Element,
    /// Enclosing element, `None` for top-level elements.
    pub parent: Option<ElementId>,
    /// Directly nested elements in document order.
    pub children: Vec<ElementId>,
}

/// Arena-based element tree with O(1) node access.
///
/// Nodes are stored in creation order, which is document order of their
/// opening tags.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ElementTree {
    nodes: Vec<Node>,
}

impl ElementTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a new element under `parent` and return its id.
    pub fn alloc(&mut self, element: Element, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent
            && let Some(node) = self.nodes.get_mut(parent.0)
        {
            node.children.push(id);
        }
        id
    }

    /// Get a node by its id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a node's element by its id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0).map(|node| &node.element)
    }

    /// Get a mutable reference to a node's element.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).map(|node| &mut node.element)
    }

    /// Parent of a node.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// Children of a node (empty slice for unknown ids).
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes.get(id.0).map_or(&[], |node| node.children.as_slice())
    }

    /// Ids of the elements that have no parent, in document order.
    pub fn roots(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| ElementId(index))
    }

    /// Iterate over all nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (ElementId(index), node))
    }

    /// Number of elements in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no element was ever allocated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first search for the first element with the given tag name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<ElementId> {
        self.iter()
            .find(|(_, node)| node.element.name == name)
            .map(|(id, _)| id)
    }
}

/// Print the tree structure (for debugging).
pub fn print_tree(tree: &ElementTree, id: ElementId, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(node) = tree.get(id) {
        let element = &node.element;
        if element.attributes.is_empty() {
            println!("{prefix}<{}>", element.name);
        } else {
            let attrs: Vec<String> = element
                .attributes
                .iter()
                .map(|(k, v)| format!("{k}=\"{v}\""))
                .collect();
            println!("{prefix}<{} {}>", element.name, attrs.join(" "));
        }
        for &child in tree.children(id) {
            print_tree(tree, child, indent + 1);
        }
    }
}
