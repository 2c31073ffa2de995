//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use rulegraph_ast::RuntimeNode;

pub fn output_json(root: &RuntimeNode<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(root).into_diagnostic()?);
    Ok(())
}
