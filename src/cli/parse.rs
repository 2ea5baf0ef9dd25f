use clap::{Parser, Subcommand, ValueEnum};

use crate::core::constants::{DEFAULT_INDENT, DEFAULT_SEPARATOR};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "tree-art",
    about = "Draw nested [label, children] lists as box-drawing trees"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a tree read from a file, stdin or the command line
    Render(RenderArgs),
    /// Print the sample trees with their rendering
    Examples,
}

/// How the input text is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// List literal: `[1, ['a', 2.5, True]]`
    #[default]
    Literal,
    /// JSON arrays and scalars
    Json,
}

/// `tree-art render …`
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-", conflicts_with = "tree")]
    pub file: String,

    /// Tree given inline instead of a file
    #[arg(short, long)]
    pub tree: Option<String>,

    /// Characters per depth level (at least 2)
    #[arg(short, long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Indentation fill character
    #[arg(short, long, default_value_t = DEFAULT_SEPARATOR)]
    pub separator: char,

    /// Input syntax
    #[arg(short, long, value_enum, default_value_t = InputFormat::Literal)]
    pub format: InputFormat,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}
