//! # rulegraph_loader
//!
//! Builds runtime networks from textual descriptions.
//!
//! A description is a tree of node objects:
//!
//! ```jsonc
//! {
//!   "kind": "RulesEngine",
//!   "children": [
//!     { "kind": "Alpha", "types": ["Order"], "children": [
//!       { "kind": "DelegateProduction", "types": ["Order"] }
//!     ]}
//!   ]
//! }
//! ```
//!
//! `types` lists the node's type parameters in declaration order; a nested
//! array stands for a tuple type. `property`, `comparator` and `value` carry
//! the attributes of property and comparison nodes.

mod error;
mod json;
mod traits;

pub use error::LoadError;
pub use json::{JsonNetworkLoader, MAX_NESTING};
pub use traits::NetworkLoader;
