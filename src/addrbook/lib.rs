//! # Addrbook Architecture
//!
//! Addrbook is an interactive address book: names, ten-digit phone numbers and
//! birthdays, kept in one snapshot file between sessions. As with any UI client of
//! this library, the binary's read-eval loop is thin; everything it does goes
//! through the API facade.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, prompt loop, rendering, exit codes                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook for the session                     │
//! │  - Dispatches parsed commands, loads and saves snapshots    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per command, returns CmdResult or an error   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (book.rs, model.rs, fields.rs) + Storage (store/)   │
//! │  - AddressBook → Record → PhoneNumber / Birthday            │
//! │  - SnapshotStore: FileStore (production), InMemoryStore     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr; diagnostics go through
//! `tracing` and the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command parsing and handlers
//! - [`book`]: The contact store and the upcoming-birthday query
//! - [`model`]: [`model::Record`]
//! - [`fields`]: Validated phone and birthday values
//! - [`store`]: Snapshot persistence
//! - [`config`]: Configuration file
//! - [`init`]: Path resolution and session setup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod init;
pub mod model;
pub mod store;
