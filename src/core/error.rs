//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::constants::{MAX_INDENT, MIN_INDENT};

/// Why a node was refused by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFault {
    /// A scalar sits where a `[label, children]` pair is required.
    NotAPair,
    /// A pair must hold exactly two elements.
    WrongLength(usize),
    /// Neither element is a sequence.
    MissingChildren,
    /// Both elements are sequences.
    AmbiguousPair,
}

impl fmt::Display for TreeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeFault::NotAPair => f.write_str("expected a [label, children] pair"),
            TreeFault::WrongLength(n) => write!(f, "pair must have 2 elements, got {n}"),
            TreeFault::MissingChildren => f.write_str("pair has no children list"),
            TreeFault::AmbiguousPair => f.write_str("both pair elements are lists"),
        }
    }
}
impl Error for TreeFault {}

/// Precise configuration faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    IndentTooSmall { indent: usize },
    IndentTooLarge { indent: usize },
    ControlSeparator(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IndentTooSmall { indent } => {
                write!(f, "indent must be at least {MIN_INDENT}, got {indent}")
            }
            ConfigError::IndentTooLarge { indent } => {
                write!(f, "indent must be at most {MAX_INDENT}, got {indent}")
            }
            ConfigError::ControlSeparator(c) => {
                write!(f, "separator must be printable, got {c:?}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Everything that can stop a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    InvalidTree(TreeFault),
    InvalidArgument(ConfigError),
    /// The caller-supplied writer refused output.
    Fmt(fmt::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidTree(e) => write!(f, "invalid tree: {e}"),
            RenderError::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            RenderError::Fmt(e) => write!(f, "{e}"),
        }
    }
}
impl Error for RenderError {}

impl From<TreeFault> for RenderError {
    fn from(e: TreeFault) -> Self {
        Self::InvalidTree(e)
    }
}
impl From<ConfigError> for RenderError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidArgument(e)
    }
}
impl From<fmt::Error> for RenderError {
    fn from(e: fmt::Error) -> Self {
        Self::Fmt(e)
    }
}

/// Input reader failure, positioned at 1-based `line`/`column` when known.
#[derive(Debug)]
pub struct ParseTreeError {
    pub line: usize,
    pub column: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    UnexpectedEnd,
    UnexpectedChar(char),
    TrailingInput,
    BadNumber(String),
    BadEscape,
    TooDeep,
    Json(serde_json::Error),
    JsonObject,
}

impl fmt::Display for ParseTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !matches!(self.kind, ParseErrorKind::Json(_) | ParseErrorKind::JsonObject) {
            write!(f, "line {}, column {}: ", self.line, self.column)?;
        }
        match &self.kind {
            ParseErrorKind::UnexpectedEnd => f.write_str("unexpected end of input"),
            ParseErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {c:?}"),
            ParseErrorKind::TrailingInput => f.write_str("trailing input after tree"),
            ParseErrorKind::BadNumber(text) => write!(f, "invalid number '{text}'"),
            ParseErrorKind::BadEscape => f.write_str("invalid escape sequence"),
            ParseErrorKind::TooDeep => f.write_str("lists nested too deeply"),
            ParseErrorKind::Json(e) => write!(f, "{e}"),
            ParseErrorKind::JsonObject => f.write_str("JSON objects cannot be tree nodes"),
        }
    }
}
impl Error for ParseTreeError {}

/// Top-level error type bubbled up by the command-line front end.
#[derive(Debug)]
pub enum ArtError {
    Io(io::Error),
    Parse(ParseTreeError),
    Render(RenderError),
}

impl fmt::Display for ArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtError::Io(e) => write!(f, "{e}"),
            ArtError::Parse(e) => write!(f, "{e}"),
            ArtError::Render(e) => write!(f, "{e}"),
        }
    }
}
impl Error for ArtError {}

// automatic conversions
impl From<io::Error> for ArtError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseTreeError> for ArtError {
    fn from(e: ParseTreeError) -> Self {
        Self::Parse(e)
    }
}
impl From<RenderError> for ArtError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
impl From<ConfigError> for ArtError {
    fn from(e: ConfigError) -> Self {
        Self::Render(e.into())
    }
}
