//! A single contact and its validated fields.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::error::{HandlerError, HandlerResult};

/// Display and input format for dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .unwrap_or_else(|e| unreachable!("email pattern is a literal: {e}"))
    })
}

/// A phone number: optional leading `+` and 10 to 12 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parses a phone number, ignoring spaces, dashes and parentheses.
    pub fn parse(raw: &str) -> HandlerResult<Self> {
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

        if !(10..=12).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(HandlerError::invalid_value(format!(
                "'{}' is not a phone number (expected 10-12 digits)",
                raw.trim()
            )));
        }
        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a `DD-MM-YYYY` date that is not after `today`.
    pub fn parse(raw: &str, today: NaiveDate) -> HandlerResult<Self> {
        let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
            HandlerError::invalid_value(format!(
                "'{}' is not a date in DD-MM-YYYY format ({e})",
                raw.trim()
            ))
        })?;
        if date > today {
            return Err(HandlerError::invalid_value(format!(
                "birthday {} is in the future",
                date.format(DATE_FORMAT)
            )));
        }
        Ok(Self(date))
    }

    /// The first anniversary on or after `today`.
    ///
    /// A 29 February birthday is observed on 28 February in common years.
    pub fn next_after(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// An e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> HandlerResult<Self> {
        let raw = raw.trim();
        if !email_regex().is_match(raw) {
            return Err(HandlerError::invalid_value(format!(
                "'{raw}' is not an e-mail address"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A free-form postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> HandlerResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(HandlerError::invalid_value("address must not be empty"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single-valued fields that `change_*` commands edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Address,
    Birthday,
    Email,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Birthday => "birthday",
            Self::Email => "email",
        }
    }
}

/// A contact: a name, any number of phones and a few optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Record {
    /// Creates a contact with only a name.
    pub fn new(name: impl Into<String>) -> HandlerResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(HandlerError::invalid_value("contact name must not be empty"));
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        })
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Adds a phone, rejecting one the contact already has.
    pub fn add_phone(&mut self, phone: Phone) -> HandlerResult<()> {
        if self.phones.contains(&phone) {
            return Err(HandlerError::invalid_value(format!(
                "{} already has phone {phone}",
                self.name
            )));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces `old` with `new` in place.
    pub fn change_phone(&mut self, old: &str, new: Phone) -> HandlerResult<()> {
        let old = Phone::parse(old)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| **p == old)
            .ok_or_else(|| HandlerError::not_found(format!("'{old}'")))?;
        *slot = new;
        Ok(())
    }

    pub fn delete_phone(&mut self, phone: &str) -> HandlerResult<()> {
        let phone = Phone::parse(phone)?;
        let before = self.phones.len();
        self.phones.retain(|p| *p != phone);
        if self.phones.len() == before {
            return Err(HandlerError::not_found(format!("'{phone}'")));
        }
        Ok(())
    }

    /// Sets `field` to `new`, provided its current value is `old`.
    ///
    /// An unset field matches an empty `old` or the literal `-`.
    pub fn change_field(
        &mut self,
        field: ContactField,
        old: &str,
        new: &str,
        today: NaiveDate,
    ) -> HandlerResult<()> {
        let current = self.field_value(field);
        let old = old.trim();
        let matches = match &current {
            Some(value) => value == old,
            None => old.is_empty() || old == "-",
        };
        if !matches {
            return Err(HandlerError::not_found(format!(
                "{} has no {} '{old}'",
                self.name,
                field.as_str()
            )));
        }

        match field {
            ContactField::Address => self.address = Some(Address::parse(new)?),
            ContactField::Birthday => self.birthday = Some(Birthday::parse(new, today)?),
            ContactField::Email => self.email = Some(Email::parse(new)?),
        }
        Ok(())
    }

    /// Current value of a single-valued field, rendered as the user typed it.
    pub fn field_value(&self, field: ContactField) -> Option<String> {
        match field {
            ContactField::Address => self.address.as_ref().map(ToString::to_string),
            ContactField::Birthday => self.birthday.as_ref().map(ToString::to_string),
            ContactField::Email => self.email.as_ref().map(ToString::to_string),
        }
    }

    /// All phones joined with `", "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The row shown by `show_all` and `search`.
    pub fn table_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phones_joined(),
            self.field_value(ContactField::Birthday).unwrap_or_default(),
            self.field_value(ContactField::Email).unwrap_or_default(),
            self.field_value(ContactField::Address).unwrap_or_default(),
        ]
    }
}
