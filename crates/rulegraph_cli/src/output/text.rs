//! Text output formatter

use rulegraph_ast::RuntimeNode;
use rulegraph_visualize::TextRenderer;
use tracing::warn;

pub fn output_text(root: &RuntimeNode<'_>, limit: Option<usize>) {
    let mut renderer = match limit {
        Some(limit) => TextRenderer::with_limit(limit),
        None => TextRenderer::new(),
    };

    // A break here only ever comes from the line limit.
    let _ = renderer.render(root);

    if renderer.is_truncated() {
        warn!(
            "Output truncated after {} of {} nodes",
            renderer.line_count(),
            root.node_count()
        );
    }

    print!("{}", renderer.as_str());
}
