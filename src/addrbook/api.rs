//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the snapshot store.
//! It owns the [`AddressBook`] for the whole session:
//!
//! - [`AddressBookApi::open`] loads the snapshot once
//! - [`AddressBookApi::execute`] dispatches one parsed command to its handler
//! - [`AddressBookApi::save`] writes the snapshot back
//!
//! ## Generic Over SnapshotStore
//!
//! `AddressBookApi<S: SnapshotStore>` is generic over the storage backend:
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`
//!
//! API tests verify dispatch and persistence hand-off, not handler logic.

use crate::book::AddressBook;
use crate::commands::{self, CmdResult, Command};
use crate::error::Result;
use crate::store::SnapshotStore;
use chrono::{Local, NaiveDateTime};
use tracing::debug;

pub struct AddressBookApi<S: SnapshotStore> {
    store: S,
    book: AddressBook,
    window_days: u32,
}

impl<S: SnapshotStore> AddressBookApi<S> {
    pub fn open(store: S, window_days: u32) -> Result<Self> {
        let book = store.load()?;
        debug!(
            location = %store.location(),
            contacts = book.len(),
            "address book opened"
        );
        Ok(Self {
            store,
            book,
            window_days,
        })
    }

    pub fn execute(&mut self, command: &Command, args: &[String]) -> Result<CmdResult> {
        self.execute_at(command, args, Local::now().naive_local())
    }

    /// Like [`execute`](Self::execute), with an explicit clock for the birthday window.
    pub fn execute_at(
        &mut self,
        command: &Command,
        args: &[String],
        now: NaiveDateTime,
    ) -> Result<CmdResult> {
        debug!(%command, args = args.len(), "dispatching");
        match command {
            Command::Hello => Ok(commands::session::hello()),
            Command::Add => commands::add::run(&mut self.book, args),
            Command::Change => commands::change::run(&mut self.book, args),
            Command::Phone => commands::phone::run(&self.book, args),
            Command::AddBirthday => commands::birthday::add(&mut self.book, args),
            Command::ShowBirthday => commands::birthday::show(&self.book, args),
            Command::Birthdays => commands::birthday::upcoming(&self.book, now, self.window_days),
            Command::All => commands::all::run(&self.book),
            Command::Exit => Ok(commands::session::exit()),
            Command::Unknown(_) => Ok(commands::session::unknown()),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }
}
