use super::{Snapshot, SnapshotStore};
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Keeps the encoded snapshot so loads go through the same decoding as files.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed `save` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.snapshot {
            Some(raw) => Ok(Snapshot::decode(raw)?.contacts),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(Snapshot::new(book).encode()?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name);
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            if self.book.find(name).is_none() {
                self.book.add_record(Record::new(name));
            }
            self.book
                .find_mut(name)
                .unwrap()
                .set_birthday(birthday)
                .unwrap();
            self
        }

        /// A store whose persisted snapshot is this fixture's book.
        pub fn into_store(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            store.save(&self.book).unwrap();
            store.saves = 0;
            store
        }
    }
}
