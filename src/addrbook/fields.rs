//! # Field Value Types
//!
//! The two validated fields a [`Record`](crate::model::Record) carries besides its name.
//! Both are constructed only through validation, so an instance in memory is always
//! well-formed. Deserialization goes through the same validation: a hand-edited
//! snapshot with a bad phone number fails to load instead of smuggling it in.
//!
//! - [`PhoneNumber`]: exactly ten ASCII digits, kept verbatim.
//! - [`Birthday`]: a calendar date entered as `DD.MM.YYYY`, displayed back zero-padded.

use crate::error::{AddrBookError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const PHONE_LEN: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A ten-digit phone number.
///
/// ```
/// use addrbook::fields::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(AddrBookError::InvalidPhoneFormat(raw));
        }
        Ok(Self(raw))
    }

    fn is_valid(raw: &str) -> bool {
        raw.len() == PHONE_LEN && raw.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

/// A birthday, parsed from the strict `DD.MM.YYYY` pattern.
///
/// Day and month may be one or two digits; the year must be exactly four.
/// The stored year is whatever the user typed, it is not normalized to the
/// next occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self> {
        parse_date(raw)
            .map(Self)
            .ok_or_else(|| AddrBookError::InvalidDateFormat(raw.to_string()))
    }

    /// Midnight of the stored date, the value the upcoming-birthday window compares.
    pub fn at_midnight(&self) -> NaiveDateTime {
        self.0.and_hms_opt(0, 0, 0).unwrap_or_default()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('.');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let numeric = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !numeric(day, 1, 2) || !numeric(month, 1, 2) || !numeric(year, 4, 4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

impl FromStr for Birthday {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_ten_digits() {
        for raw in ["0000000000", "1234567890", "0987654321"] {
            let phone = PhoneNumber::new(raw).unwrap();
            assert_eq!(phone.as_str(), raw);
        }
    }

    #[test]
    fn phone_rejects_bad_input() {
        for raw in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "+380501234",
            "123 456 78",
            "１２３４５６７８９０",
        ] {
            assert!(
                matches!(
                    PhoneNumber::new(raw),
                    Err(AddrBookError::InvalidPhoneFormat(_))
                ),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn birthday_round_trips_padded_input() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "05.01.2024"] {
            assert_eq!(Birthday::new(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn birthday_accepts_unpadded_day_and_month() {
        let birthday = Birthday::new("5.1.2024").unwrap();
        assert_eq!(birthday.to_string(), "05.01.2024");
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.04.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2024").is_err());
        assert!(Birthday::new("12.13.2024").is_err());
    }

    #[test]
    fn birthday_rejects_other_patterns() {
        for raw in [
            "2024-01-05",
            "05/01/2024",
            "05.01.24",
            "05.01.02024",
            "05.01.2024.",
            "05..2024",
            " 05.01.2024",
            "aa.bb.cccc",
        ] {
            assert!(
                matches!(Birthday::new(raw), Err(AddrBookError::InvalidDateFormat(_))),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn serde_uses_string_forms() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"1234567890\"");

        let birthday = Birthday::new("5.1.2024").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.01.2024\"");
    }

    #[test]
    fn deserialization_revalidates() {
        let bad_phone: std::result::Result<PhoneNumber, _> = serde_json::from_str("\"12\"");
        assert!(bad_phone.is_err());

        let bad_date: std::result::Result<Birthday, _> = serde_json::from_str("\"31.02.2020\"");
        assert!(bad_date.is_err());
    }

    #[test]
    fn boundary_years_survive_serde() {
        for raw in ["01.01.0000", "31.12.9999"] {
            let birthday = Birthday::new(raw).unwrap();
            let json = serde_json::to_string(&birthday).unwrap();
            let back: Birthday = serde_json::from_str(&json).unwrap();
            assert_eq!(back, birthday);
            assert_eq!(back.to_string(), raw);
        }
    }
}
