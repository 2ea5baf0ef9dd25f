//! A collection of constants.

/// Connector head for the last child of a node
pub const CORNER: char = '└';
/// Connector head for every child except the last
pub const TEE: char = '├';
/// Connector body
pub const HORIZONTAL: char = '─';
/// Ancestor continuation bar
pub const VERTICAL: char = '│';
/// Connector terminator, sits right before the label
pub const ARROW: char = '>';

/// One head glyph and one arrow, so anything narrower cannot hold a connector.
pub const MIN_INDENT: usize = 2;
/// Widest indent accepted; every segment is allocated at this width.
pub const MAX_INDENT: usize = 1024;
/// Indent used when none is given.
pub const DEFAULT_INDENT: usize = 2;
/// Fill character used when none is given.
pub const DEFAULT_SEPARATOR: char = ' ';

/// Literal inputs nested deeper than this are refused by the parser.
pub const MAX_NESTING: usize = 512;
