//! # Storage Layer
//!
//! Persistence is a whole-book snapshot: the [`SnapshotStore`] trait loads an
//! [`AddressBook`] once at startup and writes it back once at shutdown. Nothing is
//! read or written between commands.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production snapshot file.
//!   - Pretty JSON envelope carrying a format version and the save timestamp
//!   - A missing file loads as an empty book
//!   - Writes go to a temp file in the same directory, then rename over the target
//!
//! - [`memory::InMemoryStore`]: For testing the API and commands without filesystem I/O.
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "saved_at": "2024-01-01T10:00:00Z",
//!   "contacts": [ { "name": "...", "phones": ["..."], "birthday": "DD.MM.YYYY" } ]
//! }
//! ```
//!
//! The format is only promised to be readable by this same program.

use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Load the persisted book, or an empty one if nothing was saved yet
    fn load(&self) -> Result<AddressBook>;

    /// Overwrite the persisted book with `book`
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Human-readable location, for logs and messages
    fn location(&self) -> String;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub contacts: AddressBook,
}

impl Snapshot {
    pub fn new(book: &AddressBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            contacts: book.clone(),
        }
    }

    pub fn encode(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(AddrBookError::Serialization)
    }

    pub fn decode(raw: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw).map_err(AddrBookError::Serialization)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AddrBookError::Store(format!(
                "Unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        Ok(snapshot)
    }
}
