use std::process::ExitCode;

fn main() -> ExitCode {
    match tree_art::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
