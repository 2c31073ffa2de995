//! Indented text rendering of a runtime network.

use std::fmt;
use std::iter;
use std::ops::ControlFlow;

use rulegraph_ast::visitor::{Depth, RuntimeVisitor, VisitResult, walk_children, walk_node};
use rulegraph_ast::{
    AddFactNode, AlphaNode, CompareNode, ConditionNode, ConstantNode, DelegateProductionNode,
    EachNode, EqualNode, ExistsNode, JoinNode, LeftJoinNode, NotNullNode, OuterJoinNode,
    PropertyNode, RuntimeNode, ValueNode, WidenTypeNode,
};
use tracing::{debug, trace};

/// Number of spaces each nesting level adds in front of a line.
pub const PADDING_WIDTH: usize = 2;

/// Renders a runtime network as one line per node, children indented below
/// their parent.
///
/// A renderer accumulates the text of a single traversal. Read it with
/// [`TextRenderer::as_str`] or [`TextRenderer::finish`] once the traversal
/// has returned.
///
/// # Example
///
/// ```rust
/// use rulegraph_ast::{JoinNode, NetworkArena, NodeKind, RuntimeNode, TypeToken};
/// use rulegraph_visualize::TextRenderer;
///
/// let arena = NetworkArena::new();
/// let join = RuntimeNode::new_leaf(NodeKind::Join(JoinNode {
///     fact: TypeToken::named("Order"),
/// }));
/// let root = RuntimeNode::new_parent(NodeKind::RulesEngine, arena.alloc_slice_copy(&[join]));
///
/// let mut renderer = TextRenderer::new();
/// assert!(renderer.render(&root).is_continue());
/// assert_eq!(renderer.finish(), "Rules Engine\n  JoinNode[Order]\n");
/// ```
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
    lines: usize,
    limit: Option<usize>,
    truncated: bool,
}

impl TextRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that stops the traversal once `limit` lines have
    /// been written.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Renders the network below `root`, starting at depth zero.
    pub fn render<'a>(&mut self, root: &RuntimeNode<'a>) -> VisitResult {
        walk_node(self, root)
    }

    /// Returns the text rendered so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Returns the number of lines written.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Returns true if the line limit stopped the traversal.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Consumes the renderer and returns the rendered text.
    pub fn finish(self) -> String {
        self.output
    }

    fn append(&mut self, depth: Depth, line: impl fmt::Display) -> VisitResult {
        if self.limit.is_some_and(|limit| self.lines >= limit) {
            if !self.truncated {
                debug!(lines = self.lines, "line limit reached, stopping traversal");
            }
            self.truncated = true;
            return ControlFlow::Break(());
        }

        let line = line.to_string();
        trace!(depth = depth.get(), line = %line, "render node");

        let width = depth.get() * PADDING_WIDTH;
        self.output.extend(iter::repeat_n(' ', width));
        self.output.push_str(&line);
        self.output.push('\n');
        self.lines += 1;
        ControlFlow::Continue(())
    }

    /// Renders the children of `node` one level below `depth`.
    fn indent<'a>(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
        walk_children(self, node, depth.next())
    }
}

impl fmt::Display for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

impl<'a> RuntimeVisitor<'a> for TextRenderer {
    fn visit_rules_engine(&mut self, node: &RuntimeNode<'a>, depth: Depth) -> VisitResult {
        self.append(depth, "Rules Engine")?;
        self.indent(node, depth)
    }

    fn visit_join(
        &mut self,
        node: &RuntimeNode<'a>,
        join: &JoinNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(depth, format_args!("JoinNode[{}]", join.fact.label()))?;
        self.indent(node, depth)
    }

    fn visit_left_join(
        &mut self,
        node: &RuntimeNode<'a>,
        join: &LeftJoinNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!(
                "LeftJoinNode[{}] => {}",
                join.input.label(),
                join.output.label()
            ),
        )?;
        self.indent(node, depth)
    }

    fn visit_outer_join(
        &mut self,
        node: &RuntimeNode<'a>,
        join: &OuterJoinNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!(
                "OuterJoinNode[{},{}] => {}",
                join.left.label(),
                join.right.label(),
                join.output.label()
            ),
        )?;
        self.indent(node, depth)
    }

    fn visit_alpha(
        &mut self,
        node: &RuntimeNode<'a>,
        alpha: &AlphaNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(depth, format_args!("AlphaNode[{}]", alpha.fact.label()))?;
        self.indent(node, depth)
    }

    fn visit_widen_type(
        &mut self,
        node: &RuntimeNode<'a>,
        widen: &WidenTypeNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!(
                "ConvertNode[{}] => {}",
                widen.input.label(),
                widen.output.label()
            ),
        )?;
        self.indent(node, depth)
    }

    fn visit_delegate_production(
        &mut self,
        node: &RuntimeNode<'a>,
        production: &DelegateProductionNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!("DelegateProductionNode[{}]", production.fact.label()),
        )?;
        self.indent(node, depth)
    }

    /// Add-fact productions are written inline: their children stay at the
    /// production's own depth.
    fn visit_add_fact(
        &mut self,
        node: &RuntimeNode<'a>,
        add_fact: &AddFactNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!(
                "AddFactProductionNode[{}] => {}",
                add_fact.source.label(),
                add_fact.fact
            ),
        )?;
        walk_children(self, node, depth)
    }

    fn visit_property(
        &mut self,
        node: &RuntimeNode<'a>,
        property: &PropertyNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!(
                "PropertyNode[{}].{} ({})",
                property.source.label(),
                property.name,
                property.property.short_name()
            ),
        )?;
        self.indent(node, depth)
    }

    fn visit_constant(
        &mut self,
        node: &RuntimeNode<'a>,
        constant: &ConstantNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(depth, format_args!("v[{}]", constant.fact.label()))?;
        self.indent(node, depth)
    }

    fn visit_condition(
        &mut self,
        node: &RuntimeNode<'a>,
        condition: &ConditionNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(depth, format_args!("ConditionNode[{}]", condition.fact.label()))?;
        self.indent(node, depth)
    }

    fn visit_equal(
        &mut self,
        node: &RuntimeNode<'a>,
        equal: &EqualNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!(
                "EqualNode[{}] ({})",
                equal.source.label(),
                equal.property.short_name()
            ),
        )?;
        self.indent(node, depth)
    }

    fn visit_value(
        &mut self,
        node: &RuntimeNode<'a>,
        value: &ValueNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!("ValueNode[{}] == {}", value.source.label(), value.value),
        )?;
        self.indent(node, depth)
    }

    fn visit_compare(
        &mut self,
        node: &RuntimeNode<'a>,
        compare: &CompareNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!(
                "CompareNode[{},{}] {} {}",
                compare.source.label(),
                compare.property.short_name(),
                compare.comparator,
                compare.value
            ),
        )?;
        self.indent(node, depth)
    }

    fn visit_not_null(
        &mut self,
        node: &RuntimeNode<'a>,
        not_null: &NotNullNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(
            depth,
            format_args!("NotNullNode[{}] != null", not_null.source.label()),
        )?;
        self.indent(node, depth)
    }

    fn visit_exists(
        &mut self,
        node: &RuntimeNode<'a>,
        exists: &ExistsNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(depth, format_args!("ExistsNode[{}]", exists.source.label()))?;
        self.indent(node, depth)
    }

    fn visit_each(
        &mut self,
        node: &RuntimeNode<'a>,
        each: &EachNode<'a>,
        depth: Depth,
    ) -> VisitResult {
        self.append(depth, format_args!("EachNode[{}]", each.source.label()))?;
        self.indent(node, depth)
    }
}

/// Renders a whole network and returns the text.
pub fn render_network(root: &RuntimeNode<'_>) -> String {
    let mut renderer = TextRenderer::new();
    let _ = renderer.render(root);
    renderer.finish()
}
