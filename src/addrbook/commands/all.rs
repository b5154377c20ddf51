use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let records: Vec<_> = book.records().cloned().collect();
    let mut result = CmdResult::default().with_listed_records(records);
    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info("No contacts saved."));
    }
    Ok(result)
}
