//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Trees are nested `[label, children]` pairs; the label may come first or
//! second, and leaves deeper than the root may drop their empty children
//! list. A children list of exactly two entries where one is a list is read
//! as a single nested pair.
//!
//! ```
//! use tree_art::{Value, render_tree};
//!
//! let tree = Value::seq([Value::from(1), Value::seq([2, 3])]);
//! assert_eq!(render_tree(&tree, 4, '.')?, "1\n├──>2\n└──>3\n");
//! # Ok::<_, tree_art::RenderError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    error::{ArtError, ConfigError, ParseErrorKind, ParseTreeError, RenderError, TreeFault},
    json::parse as parse_json,
    literal::parse as parse_literal,
    value::{Scalar, Value},
};

pub use render::Renderer;

/// Render `tree` with `indent` chars per level, filling indentation with
/// `separator`. Fails with [`RenderError::InvalidArgument`] for an indent
/// below 2 and [`RenderError::InvalidTree`] for any malformed node.
pub fn render_tree(tree: &Value, indent: usize, separator: char) -> Result<String, RenderError> {
    let cfg = Config::builder()
        .indent(indent)
        .separator(separator)
        .build()?;
    Renderer::new(cfg)?.render(tree)
}
