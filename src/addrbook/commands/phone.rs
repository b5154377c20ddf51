use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::PhoneNumber;

use super::helpers::{exact_args, require_contact};

pub const USAGE: &str = "phone <name>";

pub fn run(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exact_args(args, 1, USAGE)?;
    let record = require_contact(book, &args[0])?;

    let joined = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(CmdResult::default().with_message(CmdMessage::info(joined)))
}
