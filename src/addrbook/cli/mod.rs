//! # CLI Layer
//!
//! This module is **one possible UI client** for addrbook. It is the only place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses process flags
//! - Formats output for human consumption
//! - Installs the `tracing` subscriber
//!
//! ## Structure
//!
//! - `setup`: Flag parsing via clap
//! - `commands`: `run()`, context setup, the read-eval loop and the save guard
//! - `render`: Messages, records and errors to text
//! - `logging`: Subscriber setup (stderr only)

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
