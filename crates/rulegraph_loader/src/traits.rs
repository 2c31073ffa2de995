//! Loader trait definition.

use rulegraph_ast::{NetworkArena, RuntimeNode};

use crate::LoadError;

/// Trait for building a runtime network out of a textual description.
///
/// # Example
///
/// ```rust,ignore
/// use rulegraph_loader::NetworkLoader;
/// use rulegraph_ast::NetworkArena;
///
/// struct MyLoader;
///
/// impl NetworkLoader for MyLoader {
///     fn name(&self) -> &str {
///         "my-loader"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["net"]
///     }
///
///     fn load<'a>(
///         &self,
///         arena: &'a NetworkArena,
///         source: &str,
///     ) -> Result<RuntimeNode<'a>, LoadError> {
///         todo!()
///     }
/// }
/// ```
pub trait NetworkLoader {
    /// Returns the name of this loader.
    fn name(&self) -> &str;

    /// Returns the file extensions this loader handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["json", "jsonc"]`).
    fn extensions(&self) -> &[&str];

    /// Loads the description into `arena` and returns the root node.
    fn load<'a>(&self, arena: &'a NetworkArena, source: &str)
    -> Result<RuntimeNode<'a>, LoadError>;

    /// Returns true if this loader can handle the given file extension.
    fn can_load(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
