//! # Contact Store
//!
//! [`AddressBook`] owns every [`Record`], keyed by contact name and iterated in
//! insertion order. Callers never see the underlying collections: they go through
//! `add_or_update`, `add_record`, `find`/`find_mut`, and `upcoming_birthdays`.
//!
//! Records are never removed, so the position index built on insert stays valid
//! for the lifetime of the book.

use crate::error::Result;
use crate::fields::PhoneNumber;
use crate::model::Record;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Whether `add_or_update` created a new contact or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
    positions: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `phone` to the contact called `name`, creating the contact first
    /// when it does not exist. The phone is validated before anything is inserted.
    pub fn add_or_update(&mut self, name: &str, phone: &str) -> Result<AddOutcome> {
        let phone = PhoneNumber::new(phone)?;
        if let Some(record) = self.find_mut(name) {
            record.push_phone(phone);
            return Ok(AddOutcome::Updated);
        }

        let mut record = Record::new(name);
        record.push_phone(phone);
        self.add_record(record);
        Ok(AddOutcome::Created)
    }

    /// Inserts `record` under its name. An existing record with the same name is
    /// replaced where it stands.
    pub fn add_record(&mut self, record: Record) {
        match self.positions.get(record.name()) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.positions
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.positions.get(name).map(|&pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let pos = *self.positions.get(name)?;
        self.records.get_mut(pos)
    }

    /// Names of contacts whose stored birthday falls within
    /// `[now, now + window_days]`, both ends inclusive.
    ///
    /// The comparison uses the birthday exactly as stored, year included, at
    /// midnight. A birthday typed with a past year therefore never qualifies.
    pub fn upcoming_birthdays(&self, now: NaiveDateTime, window_days: u32) -> Vec<String> {
        let horizon = now
            .checked_add_signed(Duration::days(i64::from(window_days)))
            .unwrap_or(NaiveDateTime::MAX);
        self.records
            .iter()
            .filter(|record| {
                record.birthday().is_some_and(|birthday| {
                    let at = birthday.at_midnight();
                    now <= at && at <= horizon
                })
            })
            .map(|record| record.name().to_string())
            .collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}
