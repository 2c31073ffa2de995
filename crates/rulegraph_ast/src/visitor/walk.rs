//! Walk functions for network traversal.
//!
//! These provide the traversal logic used by the default implementations of
//! [`RuntimeVisitor`].

use std::ops::ControlFlow;

use crate::{NodeKind, RuntimeNode};

use super::visit::{Depth, RuntimeVisitor, VisitResult};

/// Walks a traversal root at [`Depth::ROOT`] through
/// [`RuntimeVisitor::visit_node`].
///
/// # Returns
///
/// `ControlFlow::Continue(())` if the whole network was visited, or
/// `ControlFlow::Break(())` if some visit stopped the traversal.
#[inline]
pub fn walk_node<'a, V>(visitor: &mut V, node: &RuntimeNode<'a>) -> VisitResult
where
    V: RuntimeVisitor<'a>,
{
    visitor.visit_node(node, Depth::ROOT)
}

/// Walks a node by dispatching to the matching kind-specific visitor method.
///
/// This function:
/// 1. Calls `enter_node` on the visitor
/// 2. Dispatches to the `visit_*` method of the node's kind
/// 3. Calls `exit_node` on the visitor
///
/// A break from any step is returned immediately.
pub fn walk_node_at<'a, V>(visitor: &mut V, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult
where
    V: RuntimeVisitor<'a>,
{
    visitor.enter_node(node, depth)?;

    let result = match &node.kind {
        NodeKind::RulesEngine => visitor.visit_rules_engine(node, depth),
        NodeKind::Join(join) => visitor.visit_join(node, join, depth),
        NodeKind::LeftJoin(join) => visitor.visit_left_join(node, join, depth),
        NodeKind::OuterJoin(join) => visitor.visit_outer_join(node, join, depth),
        NodeKind::Alpha(alpha) => visitor.visit_alpha(node, alpha, depth),
        NodeKind::WidenType(widen) => visitor.visit_widen_type(node, widen, depth),
        NodeKind::DelegateProduction(production) => {
            visitor.visit_delegate_production(node, production, depth)
        }
        NodeKind::AddFact(add_fact) => visitor.visit_add_fact(node, add_fact, depth),
        NodeKind::Property(property) => visitor.visit_property(node, property, depth),
        NodeKind::Constant(constant) => visitor.visit_constant(node, constant, depth),
        NodeKind::Condition(condition) => visitor.visit_condition(node, condition, depth),
        NodeKind::Equal(equal) => visitor.visit_equal(node, equal, depth),
        NodeKind::Value(value) => visitor.visit_value(node, value, depth),
        NodeKind::Compare(compare) => visitor.visit_compare(node, compare, depth),
        NodeKind::NotNull(not_null) => visitor.visit_not_null(node, not_null, depth),
        NodeKind::Exists(exists) => visitor.visit_exists(node, exists, depth),
        NodeKind::Each(each) => visitor.visit_each(node, each, depth),
        NodeKind::Unknown(unknown) => visitor.visit_unknown(node, unknown, depth),
    };

    result?;

    visitor.exit_node(node, depth)
}

/// Walks all children of a node at the given depth, each through
/// [`RuntimeVisitor::visit_node`].
///
/// Stops at the first child whose traversal breaks; later siblings are not
/// visited.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult
where
    V: RuntimeVisitor<'a>,
{
    for child in node.children {
        visitor.visit_node(child, depth)?;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AddFactNode, AlphaNode, CompareNode, Comparator, JoinNode, LiteralValue, NetworkArena,
        TypeToken, UnknownNode,
    };

    fn alpha(fact: &'static str) -> RuntimeNode<'static> {
        RuntimeNode::new_leaf(NodeKind::Alpha(AlphaNode {
            fact: TypeToken::named(fact),
        }))
    }

    /// Counts nodes of each kind.
    #[derive(Default)]
    struct NodeCounter {
        engine_count: usize,
        alpha_count: usize,
        total_count: usize,
        max_depth: usize,
    }

    impl<'a> RuntimeVisitor<'a> for NodeCounter {
        fn enter_node(&mut self, _node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
            self.total_count += 1;
            self.max_depth = self.max_depth.max(depth.get());
            ControlFlow::Continue(())
        }

        fn visit_rules_engine(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
            self.engine_count += 1;
            walk_children(self, node, depth.next())
        }

        fn visit_alpha(
            &mut self,
            node: &RuntimeNode<'a>,
            _alpha: &AlphaNode<'a>,
            depth: Depth,
        ) -> VisitResult {
            self.alpha_count += 1;
            walk_children(self, node, depth.next())
        }
    }

    #[test]
    fn walk_node_visits_single_node() {
        let node = alpha("Order");

        let mut counter = NodeCounter::default();
        let result = walk_node(&mut counter, &node);

        assert!(result.is_continue());
        assert_eq!(counter.alpha_count, 1);
        assert_eq!(counter.total_count, 1);
        assert_eq!(counter.max_depth, 0);
    }

    #[test]
    fn walk_node_visits_nested_structure() {
        let arena = NetworkArena::new();
        let leaves = arena.alloc_slice_copy(&[alpha("Order"), alpha("Customer")]);
        let join = RuntimeNode::new_parent(
            NodeKind::Join(JoinNode {
                fact: TypeToken::named("Order"),
            }),
            leaves,
        );
        let root = RuntimeNode::new_parent(NodeKind::RulesEngine, arena.alloc_slice_copy(&[join]));

        let mut counter = NodeCounter::default();
        let result = walk_node(&mut counter, &root);

        assert!(result.is_continue());
        assert_eq!(counter.engine_count, 1);
        assert_eq!(counter.alpha_count, 2);
        assert_eq!(counter.total_count, 4);
        // Join keeps the default handling, so its children stay at depth 1.
        assert_eq!(counter.max_depth, 1);
    }

    #[test]
    fn default_visitor_reaches_every_node() {
        struct Noop;
        impl<'a> RuntimeVisitor<'a> for Noop {}

        let arena = NetworkArena::new();
        let compare = RuntimeNode::new_leaf(NodeKind::Compare(CompareNode {
            source: TypeToken::named("Order"),
            property: TypeToken::named("decimal"),
            comparator: Comparator::GreaterThan,
            value: LiteralValue::Int(100),
        }));
        let unknown = RuntimeNode::new_parent(
            NodeKind::Unknown(UnknownNode {
                name: "Mystery",
                types: &[],
            }),
            arena.alloc_slice_copy(&[compare]),
        );

        assert!(walk_node(&mut Noop, &unknown).is_continue());
    }

    /// Stops at the first add-fact production.
    struct FirstProductionFinder<'a> {
        found: Option<TypeToken<'a>>,
        visited: usize,
    }

    impl<'a> RuntimeVisitor<'a> for FirstProductionFinder<'a> {
        fn enter_node(&mut self, _node: &RuntimeNode<'a>, _depth: Depth) -> VisitResult {
            self.visited += 1;
            ControlFlow::Continue(())
        }

        fn visit_add_fact(
            &mut self,
            _node: &RuntimeNode<'a>,
            add_fact: &AddFactNode<'a>,
            _depth: Depth,
        ) -> VisitResult {
            self.found = Some(add_fact.fact);
            ControlFlow::Break(())
        }
    }

    #[test]
    fn walk_node_supports_early_termination() {
        let arena = NetworkArena::new();
        let first = RuntimeNode::new_leaf(NodeKind::AddFact(AddFactNode {
            source: TypeToken::named("Order"),
            fact: TypeToken::named("Invoice"),
        }));
        let second = RuntimeNode::new_leaf(NodeKind::AddFact(AddFactNode {
            source: TypeToken::named("Order"),
            fact: TypeToken::named("Receipt"),
        }));
        let root = RuntimeNode::new_parent(
            NodeKind::RulesEngine,
            arena.alloc_slice_copy(&[first, second]),
        );

        let mut finder = FirstProductionFinder {
            found: None,
            visited: 0,
        };
        let result = walk_node(&mut finder, &root);

        assert!(result.is_break());
        assert_eq!(finder.found, Some(TypeToken::named("Invoice")));
        assert_eq!(finder.visited, 2);
    }

    #[test]
    fn walk_children_empty_children() {
        let node = RuntimeNode::new_leaf(NodeKind::RulesEngine);

        let mut counter = NodeCounter::default();
        let result = walk_children(&mut counter, &node, Depth::ROOT);

        assert!(result.is_continue());
        assert_eq!(counter.total_count, 0);
    }

    #[test]
    fn every_node_passes_through_visit_node() {
        #[derive(Default)]
        struct DispatchCounter {
            dispatched: usize,
        }

        impl<'a> RuntimeVisitor<'a> for DispatchCounter {
            fn visit_node(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
                self.dispatched += 1;
                walk_node_at(self, node, depth)
            }
        }

        let arena = NetworkArena::new();
        let root = RuntimeNode::new_parent(
            NodeKind::RulesEngine,
            arena.alloc_slice_copy(&[alpha("Order"), alpha("Customer")]),
        );

        let mut counter = DispatchCounter::default();
        assert!(walk_node(&mut counter, &root).is_continue());
        assert_eq!(counter.dispatched, 3);
    }

    #[test]
    fn visit_node_override_can_skip_subtrees() {
        /// Counts nodes but never descends below a join.
        #[derive(Default)]
        struct JoinPruner {
            seen: usize,
        }

        impl<'a> RuntimeVisitor<'a> for JoinPruner {
            fn visit_node(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
                self.seen += 1;
                if matches!(node.kind, NodeKind::Join(_)) {
                    return ControlFlow::Continue(());
                }
                walk_node_at(self, node, depth)
            }
        }

        let arena = NetworkArena::new();
        let join = RuntimeNode::new_parent(
            NodeKind::Join(JoinNode {
                fact: TypeToken::named("Order"),
            }),
            arena.alloc_slice_copy(&[alpha("Order"), alpha("Customer")]),
        );
        let root = RuntimeNode::new_parent(
            NodeKind::RulesEngine,
            arena.alloc_slice_copy(&[join, alpha("Invoice")]),
        );

        let mut pruner = JoinPruner::default();
        assert!(walk_node(&mut pruner, &root).is_continue());
        assert_eq!(pruner.seen, 3);
    }

    #[test]
    fn walk_node_calls_enter_and_exit_hooks_at_same_depth() {
        struct HookTracker {
            events: Vec<String>,
        }

        impl<'a> RuntimeVisitor<'a> for HookTracker {
            fn enter_node(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
                self.events.push(format!("enter:{}@{}", node.name(), depth.get()));
                ControlFlow::Continue(())
            }

            fn exit_node(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
                self.events.push(format!("exit:{}@{}", node.name(), depth.get()));
                ControlFlow::Continue(())
            }

            fn visit_rules_engine(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
                walk_children(self, node, depth.next())
            }
        }

        let arena = NetworkArena::new();
        let root = RuntimeNode::new_parent(
            NodeKind::RulesEngine,
            arena.alloc_slice_copy(&[alpha("Order")]),
        );

        let mut tracker = HookTracker { events: Vec::new() };
        let _ = walk_node(&mut tracker, &root);

        assert_eq!(
            tracker.events,
            vec![
                "enter:RulesEngine@0",
                "enter:Alpha@1",
                "exit:Alpha@1",
                "exit:RulesEngine@0"
            ]
        );
    }
}
