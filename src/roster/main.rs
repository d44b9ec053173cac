//! # Roster CLI
//!
//! The binary is intentionally thin: the client lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns all
//! user-facing concerns: argument parsing, reading shell lines, logging setup,
//! dispatch, error display, and rendering.
//!
//! Since the roster lives in memory, a roster only exists for the lifetime of
//! one process. `roster shell` therefore keeps one roster alive while it reads
//! commands from stdin, and `roster demo` builds its own.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
