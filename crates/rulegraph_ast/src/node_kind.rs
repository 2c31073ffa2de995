//! Node variants of a runtime network and their typed payloads.
//!
//! Each payload holds the type tokens standing in for the node's generic
//! parameters plus whatever scalar attributes the node carries.

use crate::{Comparator, LiteralValue, NetworkArena, TypeToken};

/// Joins the activations of one fact type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinNode<'a> {
    pub fact: TypeToken<'a>,
}

/// Joins an input fact into an output type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeftJoinNode<'a> {
    pub input: TypeToken<'a>,
    pub output: TypeToken<'a>,
}

/// Joins two fact types into a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterJoinNode<'a> {
    pub left: TypeToken<'a>,
    pub right: TypeToken<'a>,
    /// The combined `(left, right)` token.
    pub output: TypeToken<'a>,
}

impl<'a> OuterJoinNode<'a> {
    /// Creates an outer join, deriving the pair token in `arena`.
    pub fn new(arena: &'a NetworkArena, left: TypeToken<'a>, right: TypeToken<'a>) -> Self {
        Self {
            left,
            right,
            output: arena.pair(left, right),
        }
    }
}

/// Entry filter for one fact type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaNode<'a> {
    pub fact: TypeToken<'a>,
}

/// Converts activations of `input` into activations of a wider `output`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidenTypeNode<'a> {
    pub input: TypeToken<'a>,
    pub output: TypeToken<'a>,
}

/// Production that invokes a callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelegateProductionNode<'a> {
    pub fact: TypeToken<'a>,
}

/// Production that adds a new fact to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddFactNode<'a> {
    pub source: TypeToken<'a>,
    pub fact: TypeToken<'a>,
}

/// Reads a property off a source fact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyNode<'a> {
    pub source: TypeToken<'a>,
    /// Declared type of the property.
    pub property: TypeToken<'a>,
    pub value: TypeToken<'a>,
    /// Property name.
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantNode<'a> {
    pub fact: TypeToken<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionNode<'a> {
    pub fact: TypeToken<'a>,
}

/// Tests a property for equality, grouping activations by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualNode<'a> {
    pub source: TypeToken<'a>,
    pub property: TypeToken<'a>,
}

/// Passes activations whose property equals a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueNode<'a> {
    pub source: TypeToken<'a>,
    pub property: TypeToken<'a>,
    pub value: LiteralValue<'a>,
}

/// Passes activations whose property compares against a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareNode<'a> {
    pub source: TypeToken<'a>,
    pub property: TypeToken<'a>,
    pub comparator: Comparator,
    pub value: LiteralValue<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotNullNode<'a> {
    pub source: TypeToken<'a>,
    pub property: TypeToken<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExistsNode<'a> {
    pub source: TypeToken<'a>,
    pub property: TypeToken<'a>,
}

/// Visits each element of a collection property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EachNode<'a> {
    pub source: TypeToken<'a>,
    pub property: TypeToken<'a>,
    pub element: TypeToken<'a>,
}

/// A node whose kind this model does not know.
///
/// Its declared type parameters are kept so the node survives a
/// load/serialize round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnknownNode<'a> {
    pub name: &'a str,
    pub types: &'a [TypeToken<'a>],
}

/// The kind of a runtime network node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind<'a> {
    /// Root marker of a rules engine.
    RulesEngine,
    Join(JoinNode<'a>),
    LeftJoin(LeftJoinNode<'a>),
    OuterJoin(OuterJoinNode<'a>),
    Alpha(AlphaNode<'a>),
    WidenType(WidenTypeNode<'a>),
    DelegateProduction(DelegateProductionNode<'a>),
    AddFact(AddFactNode<'a>),
    Property(PropertyNode<'a>),
    Constant(ConstantNode<'a>),
    Condition(ConditionNode<'a>),
    Equal(EqualNode<'a>),
    Value(ValueNode<'a>),
    Compare(CompareNode<'a>),
    NotNull(NotNullNode<'a>),
    Exists(ExistsNode<'a>),
    Each(EachNode<'a>),
    /// A node kind this model does not know, kept by name.
    Unknown(UnknownNode<'a>),
}

impl<'a> NodeKind<'a> {
    /// Returns the canonical name of this kind.
    pub const fn name(&self) -> &'a str {
        match self {
            NodeKind::RulesEngine => "RulesEngine",
            NodeKind::Join(_) => "Join",
            NodeKind::LeftJoin(_) => "LeftJoin",
            NodeKind::OuterJoin(_) => "OuterJoin",
            NodeKind::Alpha(_) => "Alpha",
            NodeKind::WidenType(_) => "WidenType",
            NodeKind::DelegateProduction(_) => "DelegateProduction",
            NodeKind::AddFact(_) => "AddFact",
            NodeKind::Property(_) => "Property",
            NodeKind::Constant(_) => "Constant",
            NodeKind::Condition(_) => "Condition",
            NodeKind::Equal(_) => "Equal",
            NodeKind::Value(_) => "Value",
            NodeKind::Compare(_) => "Compare",
            NodeKind::NotNull(_) => "NotNull",
            NodeKind::Exists(_) => "Exists",
            NodeKind::Each(_) => "Each",
            NodeKind::Unknown(node) => node.name,
        }
    }

    /// Returns the declared type parameters, in order.
    ///
    /// The derived pair of an outer join is not a parameter and is not
    /// included.
    pub fn type_tokens(&self) -> Vec<TypeToken<'a>> {
        match *self {
            NodeKind::RulesEngine => Vec::new(),
            NodeKind::Unknown(node) => node.types.to_vec(),
            NodeKind::Join(JoinNode { fact })
            | NodeKind::Alpha(AlphaNode { fact })
            | NodeKind::DelegateProduction(DelegateProductionNode { fact })
            | NodeKind::Constant(ConstantNode { fact })
            | NodeKind::Condition(ConditionNode { fact }) => vec![fact],
            NodeKind::LeftJoin(LeftJoinNode { input, output })
            | NodeKind::WidenType(WidenTypeNode { input, output }) => vec![input, output],
            NodeKind::OuterJoin(node) => vec![node.left, node.right],
            NodeKind::AddFact(node) => vec![node.source, node.fact],
            NodeKind::Property(node) => vec![node.source, node.property, node.value],
            NodeKind::Equal(EqualNode { source, property })
            | NodeKind::NotNull(NotNullNode { source, property })
            | NodeKind::Exists(ExistsNode { source, property }) => vec![source, property],
            NodeKind::Value(node) => vec![node.source, node.property],
            NodeKind::Compare(node) => vec![node.source, node.property],
            NodeKind::Each(node) => vec![node.source, node.property, node.element],
        }
    }
}
