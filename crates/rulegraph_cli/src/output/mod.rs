//! Output formatting module

mod json;
mod text;

use miette::Result;
use rulegraph_ast::RuntimeNode;

use crate::cli::OutputFormat;

pub fn output_network(
    root: &RuntimeNode<'_>,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(root),
        OutputFormat::Text => {
            text::output_text(root, limit);
            Ok(())
        }
    }
}
