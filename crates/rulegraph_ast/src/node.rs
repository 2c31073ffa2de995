//! RuntimeNode definition.

use serde::Serialize;

use crate::NodeKind;

/// A node of a runtime rule network.
///
/// Nodes are allocated in a [`NetworkArena`](crate::NetworkArena); the `'a`
/// lifetime ties children, type names and attribute strings to it.
///
/// # Example
///
/// ```rust
/// use rulegraph_ast::{AlphaNode, NetworkArena, NodeKind, RuntimeNode, TypeToken};
///
/// let arena = NetworkArena::new();
///
/// let alpha = RuntimeNode::new_leaf(NodeKind::Alpha(AlphaNode {
///     fact: TypeToken::named("Order"),
/// }));
/// let children = arena.alloc_slice_copy(&[alpha]);
/// let engine = RuntimeNode::new_parent(NodeKind::RulesEngine, children);
///
/// assert!(engine.has_children());
/// assert_eq!(engine.node_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeNode<'a> {
    /// Variant and typed payload of this node.
    pub kind: NodeKind<'a>,

    /// Successor nodes.
    pub children: &'a [RuntimeNode<'a>],
}

impl<'a> RuntimeNode<'a> {
    /// Creates a node with successors.
    #[inline]
    pub const fn new_parent(kind: NodeKind<'a>, children: &'a [RuntimeNode<'a>]) -> Self {
        Self { kind, children }
    }

    /// Creates a node without successors.
    #[inline]
    pub const fn new_leaf(kind: NodeKind<'a>) -> Self {
        Self {
            kind,
            children: &[],
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the canonical kind name.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.kind.name()
    }

    /// Counts this node and every node below it.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RuntimeNode::node_count).sum::<usize>()
    }
}

/// Serializes to the network description format:
/// `{ "kind", "types"?, "property"?, "comparator"?, "value"?, "children"? }`.
impl<'a> Serialize for RuntimeNode<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let types = self.kind.type_tokens();

        let mut len = 1; // kind
        if !types.is_empty() {
            len += 1;
        }
        if self.has_children() {
            len += 1;
        }
        len += self.attribute_count();

        let mut state = serializer.serialize_struct("RuntimeNode", len)?;

        state.serialize_field("kind", self.name())?;

        if !types.is_empty() {
            state.serialize_field("types", &types)?;
        }

        match &self.kind {
            NodeKind::Property(node) => state.serialize_field("property", node.name)?,
            NodeKind::Value(node) => state.serialize_field("value", &node.value)?,
            NodeKind::Compare(node) => {
                state.serialize_field("comparator", &node.comparator)?;
                state.serialize_field("value", &node.value)?;
            }
            _ => {}
        }

        if self.has_children() {
            state.serialize_field("children", &self.children)?;
        }

        state.end()
    }
}

impl RuntimeNode<'_> {
    /// Number of scalar attributes written by `Serialize`.
    fn attribute_count(&self) -> usize {
        match self.kind {
            NodeKind::Property(_) | NodeKind::Value(_) => 1,
            NodeKind::Compare(_) => 2,
            _ => 0,
        }
    }
}
