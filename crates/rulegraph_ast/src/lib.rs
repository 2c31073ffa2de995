//! # rulegraph_ast
//!
//! Runtime network model for rulegraph.
//!
//! This crate provides the node types of a compiled rule network (joins,
//! filters, conversions, productions and property tests) together with a
//! visitor for walking them.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation of nodes
//! - Nodes are `Copy` and borrow their children, names and tokens from the arena
//! - [`NodeKind`] is a closed enum; [`visitor::walk_node`] matches it
//!   exhaustively, so adding a kind is checked by the compiler
//!
//! ## Example
//!
//! ```rust
//! use rulegraph_ast::{JoinNode, NetworkArena, NodeKind, RuntimeNode, TypeToken};
//!
//! let arena = NetworkArena::new();
//!
//! let join = RuntimeNode::new_leaf(NodeKind::Join(JoinNode {
//!     fact: TypeToken::named(arena.alloc_str("Order")),
//! }));
//! let root = RuntimeNode::new_parent(NodeKind::RulesEngine, arena.alloc_slice_copy(&[join]));
//! assert_eq!(root.node_count(), 2);
//! ```

mod arena;
mod literal;
mod node;
mod node_kind;
mod token;
pub mod visitor;

pub use arena::NetworkArena;
pub use literal::{Comparator, LiteralValue, ParseComparatorError};
pub use node::RuntimeNode;
pub use node_kind::{
    AddFactNode, AlphaNode, CompareNode, ConditionNode, ConstantNode, DelegateProductionNode,
    EachNode, EqualNode, ExistsNode, JoinNode, LeftJoinNode, NodeKind, NotNullNode,
    OuterJoinNode, PropertyNode, UnknownNode, ValueNode, WidenTypeNode,
};
pub use token::{TokenLabel, TypeToken, short_type_name};

// Re-export commonly used visitor items for convenience
pub use visitor::{Depth, RuntimeVisitor, VisitResult};
