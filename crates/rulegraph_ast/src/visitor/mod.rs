//! Visitor pattern for runtime network traversal.
//!
//! # Overview
//!
//! - [`RuntimeVisitor`] - Read-only traversal trait, one method per node kind
//! - [`walk_node`] - Traverses a root, dispatching on its kind
//! - [`walk_children`] - Traverses the children of a node at a given depth
//! - [`Depth`] - Nesting level threaded through every visit
//!
//! # Early Termination
//!
//! ```rust
//! use rulegraph_ast::{CompareNode, Comparator, LiteralValue, NetworkArena, NodeKind, RuntimeNode, TypeToken};
//! use rulegraph_ast::visitor::{Depth, RuntimeVisitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! /// Stops at the first comparison.
//! struct FirstComparison {
//!     comparator: Option<Comparator>,
//! }
//!
//! impl<'a> RuntimeVisitor<'a> for FirstComparison {
//!     fn visit_compare(
//!         &mut self,
//!         _node: &RuntimeNode<'a>,
//!         compare: &CompareNode<'a>,
//!         _depth: Depth,
//!     ) -> VisitResult {
//!         self.comparator = Some(compare.comparator);
//!         ControlFlow::Break(())
//!     }
//! }
//!
//! let compare = RuntimeNode::new_leaf(NodeKind::Compare(CompareNode {
//!     source: TypeToken::named("Order"),
//!     property: TypeToken::named("decimal"),
//!     comparator: Comparator::GreaterThan,
//!     value: LiteralValue::Int(100),
//! }));
//!
//! let mut finder = FirstComparison { comparator: None };
//! assert!(walk_node(&mut finder, &compare).is_break());
//! assert_eq!(finder.comparator, Some(Comparator::GreaterThan));
//! ```

mod visit;
mod walk;

pub use visit::{Depth, RuntimeVisitor, VisitResult};
pub use walk::{walk_children, walk_node, walk_node_at};
