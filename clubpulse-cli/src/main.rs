//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = clubpulse_cli::run() {
        eprintln!("clubpulse: {err}");
        std::process::exit(1);
    }
}
