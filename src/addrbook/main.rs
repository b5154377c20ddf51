//! # Addrbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/addrbook/cli/`, and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! A session looks like this:
//!
//! ```text
//! Welcome to the assistant bot!
//! Enter a command: add alice 0501234567
//! Contact added.
//! Enter a command: add-birthday alice 05.01.1990
//! Birthday added to contact alice.
//! Enter a command: exit
//! Good bye!
//! ```
//!
//! The snapshot is written when the session ends, whether through `exit`/`close`,
//! end of input, or a panic unwinding out of the loop.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
