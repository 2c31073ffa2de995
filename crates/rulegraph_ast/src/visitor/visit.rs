//! Visitor trait for traversing runtime networks.
//!
//! Each `visit_*` method receives the node, the variant's typed payload and
//! the depth the node sits at. The default implementations visit the
//! children at the same depth without doing anything else, so a visitor only
//! overrides the node kinds it cares about.
//!
//! # Example
//!
//! ```rust
//! use rulegraph_ast::{AlphaNode, NetworkArena, NodeKind, RuntimeNode, TypeToken};
//! use rulegraph_ast::visitor::{Depth, RuntimeVisitor, VisitResult, walk_children, walk_node};
//!
//! /// Collects the fact types of every alpha node.
//! struct AlphaCollector<'a> {
//!     facts: Vec<TypeToken<'a>>,
//! }
//!
//! impl<'a> RuntimeVisitor<'a> for AlphaCollector<'a> {
//!     fn visit_alpha(
//!         &mut self,
//!         node: &RuntimeNode<'a>,
//!         alpha: &AlphaNode<'a>,
//!         depth: Depth,
//!     ) -> VisitResult {
//!         self.facts.push(alpha.fact);
//!         walk_children(self, node, depth)
//!     }
//! }
//!
//! let arena = NetworkArena::new();
//! let alpha = RuntimeNode::new_leaf(NodeKind::Alpha(AlphaNode {
//!     fact: TypeToken::named("Order"),
//! }));
//! let root = RuntimeNode::new_parent(NodeKind::RulesEngine, arena.alloc_slice_copy(&[alpha]));
//!
//! let mut collector = AlphaCollector { facts: Vec::new() };
//! walk_node(&mut collector, &root);
//! assert_eq!(collector.facts, vec![TypeToken::named("Order")]);
//! ```

use std::ops::ControlFlow;

use crate::{
    AddFactNode, AlphaNode, CompareNode, ConditionNode, ConstantNode, DelegateProductionNode,
    EachNode, EqualNode, ExistsNode, JoinNode, LeftJoinNode, NotNullNode, OuterJoinNode,
    PropertyNode, RuntimeNode, UnknownNode, ValueNode, WidenTypeNode,
};

use super::walk::{walk_children, walk_node_at};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue with siblings and ancestors
/// - `ControlFlow::Break(())` - stop the whole traversal
pub type VisitResult = ControlFlow<()>;

/// Nesting level of a node within the current traversal.
///
/// The root is visited at [`Depth::ROOT`]; a visitor that wants its children
/// one level deeper passes [`Depth::next`] to `walk_children`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(usize);

impl Depth {
    /// Depth of the traversal root.
    pub const ROOT: Depth = Depth(0);

    /// Returns the nesting level.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the depth one level below this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Visitor trait for traversing a runtime network without modification.
///
/// Dispatch is done by [`walk_node`](super::walk_node), which matches the
/// node's [`NodeKind`](crate::NodeKind) exhaustively and calls the matching
/// `visit_*` method.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop. A break propagates to every enclosing
/// visit; use the `?` operator for convenient propagation.
pub trait RuntimeVisitor<'a>: Sized {
    /// Called before dispatching any node.
    #[inline]
    fn enter_node(&mut self, _node: &RuntimeNode<'a>, _depth: Depth) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a node and all its children were visited.
    #[inline]
    fn exit_node(&mut self, _node: &RuntimeNode<'a>, _depth: Depth) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Entry point for every node reached by [`walk_node`](super::walk_node)
    /// and [`walk_children`]. The default dispatches to the kind-specific
    /// method; an override can filter or wrap nodes and must call
    /// [`walk_node_at`] to keep the dispatch.
    #[inline]
    fn visit_node(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
        walk_node_at(self, node, depth)
    }

    // === Structure ===

    /// Visit the rules engine root marker.
    fn visit_rules_engine(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_join(
        &mut self,
        node: &RuntimeNode<'a>,
        _join: &JoinNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_left_join(
        &mut self,
        node: &RuntimeNode<'a>,
        _join: &LeftJoinNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_outer_join(
        &mut self,
        node: &RuntimeNode<'a>,
        _join: &OuterJoinNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_alpha(
        &mut self,
        node: &RuntimeNode<'a>,
        _alpha: &AlphaNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_widen_type(
        &mut self,
        node: &RuntimeNode<'a>,
        _widen: &WidenTypeNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    // === Productions ===

    fn visit_delegate_production(
        &mut self,
        node: &RuntimeNode<'a>,
        _production: &DelegateProductionNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_add_fact(
        &mut self,
        node: &RuntimeNode<'a>,
        _add_fact: &AddFactNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    // === Values ===

    fn visit_property(
        &mut self,
        node: &RuntimeNode<'a>,
        _property: &PropertyNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_constant(
        &mut self,
        node: &RuntimeNode<'a>,
        _constant: &ConstantNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_condition(
        &mut self,
        node: &RuntimeNode<'a>,
        _condition: &ConditionNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    // === Tests ===

    fn visit_equal(
        &mut self,
        node: &RuntimeNode<'a>,
        _equal: &EqualNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_value(
        &mut self,
        node: &RuntimeNode<'a>,
        _value: &ValueNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_compare(
        &mut self,
        node: &RuntimeNode<'a>,
        _compare: &CompareNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_not_null(
        &mut self,
        node: &RuntimeNode<'a>,
        _not_null: &NotNullNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_exists(
        &mut self,
        node: &RuntimeNode<'a>,
        _exists: &ExistsNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    fn visit_each(
        &mut self,
        node: &RuntimeNode<'a>,
        _each: &EachNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }

    /// Visit a node of unrecognized kind.
    fn visit_unknown(
        &mut self,
        node: &RuntimeNode<'a>,
        _unknown: &UnknownNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        walk_children(self, node, depth)
    }
}
