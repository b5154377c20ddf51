use crate::book::{AddOutcome, AddressBook};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::debug;

use super::helpers::leading_args;

pub const USAGE: &str = "add <name> <phone>";

pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = leading_args(args, 2, USAGE)?;
    let (name, phone) = (&args[0], &args[1]);

    let outcome = book.add_or_update(name, phone)?;
    debug!(name = %name, ?outcome, "phone added");

    let message = match outcome {
        AddOutcome::Created => "Contact added.",
        AddOutcome::Updated => "Contact updated.",
    };
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}
