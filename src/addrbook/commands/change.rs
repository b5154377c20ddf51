use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};

use super::helpers::{exact_args, require_contact_mut};

pub const USAGE: &str = "change <name> <new phone>";

/// Replaces the contact's first phone number.
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exact_args(args, 2, USAGE)?;
    let (name, new_phone) = (&args[0], &args[1]);

    let record = require_contact_mut(book, name)?;
    let first = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| AddrBookError::PhoneNotFound(format!("for contact {}", name)))?;
    record.edit_phone(&first, new_phone)?;

    Ok(CmdResult::default().with_message(CmdMessage::success("Contact updated.")))
}
