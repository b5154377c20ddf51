use crate::error::{AddrBookError, Result};
use crate::fields::{Birthday, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a fixed name, its phone numbers in the order they were added,
/// and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    pub(crate) fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = PhoneNumber::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| AddrBookError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    pub fn delete_phone(&mut self, raw: &str) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == raw)
            .ok_or_else(|| AddrBookError::PhoneNotFound(raw.to_string()))?;
        self.phones.remove(pos);
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Last write wins.
    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "-".to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
