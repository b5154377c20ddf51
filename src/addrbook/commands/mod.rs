//! # Command Layer
//!
//! One submodule per user command. Each handler takes the whitespace-split argument
//! tokens and the [`AddressBook`](crate::book::AddressBook), and returns a structured
//! [`CmdResult`] or an [`AddrBookError`](crate::error::AddrBookError).
//!
//! Handlers never print. The CLI decides how to render messages and listed records,
//! and it renders errors the same way whatever their kind.
//!
//! ## Command Modules
//!
//! - [`add`]: `add <name> <phone>`: create a contact or append a phone
//! - [`change`]: `change <name> <phone>`: replace a contact's first phone
//! - [`phone`]: `phone <name>`: show a contact's phones
//! - [`birthday`]: `add-birthday`, `show-birthday`, `birthdays`
//! - [`all`]: `all`: list every contact
//! - [`session`]: `hello`, `close`/`exit`, unknown input
//! - [`helpers`]: argument-count checks and contact lookup

use crate::model::Record;
use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod all;
pub mod birthday;
pub mod change;
pub mod helpers;
pub mod phone;
pub mod session;

/// A recognized command word, or the word the user typed if it is not one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    All,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "all" => Command::All,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_word(s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::All => "all",
            Command::Exit => "exit",
            Command::Unknown(word) => word,
        };
        f.write_str(word)
    }
}

/// Splits a line into a lowercased command and its argument tokens.
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?.to_lowercase();
    let command = Command::from_word(&word);
    Some((command, tokens.map(str::to_string).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
    /// Set by `close`/`exit`: the session should persist and stop.
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Message contents joined by newlines, handy for assertions.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_lowercases_command_only() {
        let (command, args) = parse_input("  ADD  Alice   1234567890 ").unwrap();
        assert_eq!(command, Command::Add);
        assert_eq!(args, vec!["Alice".to_string(), "1234567890".to_string()]);
    }

    #[test]
    fn parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t ").is_none());
    }

    #[test]
    fn parse_input_aliases_and_unknown() {
        assert_eq!(parse_input("close").unwrap().0, Command::Exit);
        assert_eq!(parse_input("Exit").unwrap().0, Command::Exit);
        assert_eq!(
            parse_input("Remove bob").unwrap().0,
            Command::Unknown("remove".into())
        );
    }

    #[test]
    fn command_display_round_trips() {
        for word in [
            "hello",
            "add",
            "change",
            "phone",
            "add-birthday",
            "show-birthday",
            "birthdays",
            "all",
            "exit",
        ] {
            let command: Command = word.parse().unwrap();
            assert_eq!(command.to_string(), word);
        }
    }
}
