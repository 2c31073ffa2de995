//! # rulegraph_visualize
//!
//! Human-readable dumps of rulegraph runtime networks.
//!
//! [`TextRenderer`] walks a network from its root and writes one line per
//! node: the node kind, its type parameters in brackets and any node-specific
//! attributes. Children are indented [`PADDING_WIDTH`] spaces below their
//! parent.
//!
//! ```text
//! Rules Engine
//!   AlphaNode[Order]
//!     PropertyNode[Order].Amount (Decimal)
//!       CompareNode[Order,Decimal] > 100
//!         DelegateProductionNode[Order]
//! ```

mod text;

pub use text::{PADDING_WIDTH, TextRenderer, render_network};
