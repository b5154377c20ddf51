use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use crate::model::Record;

/// Fails unless exactly `count` tokens were given.
pub fn exact_args<'a>(
    args: &'a [String],
    count: usize,
    usage: &'static str,
) -> Result<&'a [String]> {
    match args.len() {
        n if n < count => Err(AddrBookError::MissingArgument { usage }),
        n if n > count => Err(AddrBookError::UnexpectedArgument { usage }),
        _ => Ok(args),
    }
}

/// Fails when fewer than `count` tokens were given; extra tokens are ignored.
pub fn leading_args<'a>(
    args: &'a [String],
    count: usize,
    usage: &'static str,
) -> Result<&'a [String]> {
    if args.len() < count {
        return Err(AddrBookError::MissingArgument { usage });
    }
    Ok(&args[..count])
}

pub fn require_contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
}

pub fn require_contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
}
