mod handlers;
pub mod parse;

use clap::Parser;
pub use handlers::{SAMPLES, render_to_string};
pub use parse::Cli;

use crate::core::error::ArtError;

pub fn run() -> Result<(), ArtError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Render(a) => handlers::render(&a),
        parse::Command::Examples => handlers::examples(),
    }
}
