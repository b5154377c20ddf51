use crate::book::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use chrono::NaiveDateTime;

use super::helpers::{exact_args, require_contact, require_contact_mut};

pub const ADD_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const SHOW_USAGE: &str = "show-birthday <name>";

pub const NONE_UPCOMING: &str = "No birthdays in the coming week.";

fn none_upcoming(window_days: u32) -> String {
    match window_days {
        DEFAULT_WINDOW_DAYS => NONE_UPCOMING.to_string(),
        1 => "No birthdays in the coming day.".to_string(),
        n => format!("No birthdays in the coming {} days.", n),
    }
}

pub fn add(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exact_args(args, 2, ADD_USAGE)?;
    let (name, date) = (&args[0], &args[1]);

    require_contact_mut(book, name)?.set_birthday(date)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Birthday added to contact {}.",
        name
    ))))
}

pub fn show(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let args = exact_args(args, 1, SHOW_USAGE)?;
    let name = &args[0];

    let birthday = require_contact(book, name)?
        .birthday()
        .ok_or_else(|| AddrBookError::BirthdayNotFound(name.clone()))?;

    Ok(CmdResult::default().with_message(CmdMessage::info(birthday.to_string())))
}

pub fn upcoming(book: &AddressBook, now: NaiveDateTime, window_days: u32) -> Result<CmdResult> {
    let names = book.upcoming_birthdays(now, window_days);
    let message = if names.is_empty() {
        CmdMessage::info(none_upcoming(window_days))
    } else {
        CmdMessage::info(names.join("\n"))
    };
    Ok(CmdResult::default().with_message(message))
}
