//! Aggregates the tree model, validation and input readers.

pub mod config;
pub mod constants;
pub mod error;
pub mod json;
pub mod literal;
pub mod validate;
pub mod value;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_INDENT, DEFAULT_SEPARATOR, MAX_INDENT, MAX_NESTING, MIN_INDENT};
pub use error::{ArtError, ConfigError, ParseErrorKind, ParseTreeError, RenderError, TreeFault};
pub use validate::{Pair, is_shorthand_pair, validate};
pub use value::{Scalar, Value};
