//! The contact book.
//!
//! Contacts are keyed by name and listed alphabetically.

mod record;

pub use record::{Address, Birthday, ContactField, Email, Phone, Record, DATE_FORMAT};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{HandlerError, HandlerResult};

/// All known contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Looks up a contact for editing, failing with a lookup error.
    pub fn get_mut(&mut self, name: &str) -> HandlerResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| HandlerError::not_found(format!("'{name}'")))
    }

    /// Adds a new contact. Names are unique.
    pub fn add_record(&mut self, record: Record) -> HandlerResult<()> {
        if self.records.contains_key(&record.name) {
            return Err(HandlerError::invalid_value(format!(
                "contact '{}' already exists",
                record.name
            )));
        }
        self.records.insert(record.name.clone(), record);
        Ok(())
    }

    pub fn remove_record(&mut self, name: &str) -> HandlerResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| HandlerError::not_found(format!("'{name}'")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose name contains `text` (case-insensitive) or whose
    /// phones contain it.
    pub fn search(&self, text: &str) -> Vec<&Record> {
        let needle = text.to_lowercase();
        self.records
            .values()
            .filter(|r| r.name.to_lowercase().contains(&needle) || r.phones_joined().contains(&needle))
            .collect()
    }

    /// Contacts with a birthday anniversary in `[today, today + days]`,
    /// soonest first. A window ending past the last representable date is
    /// a value error.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> HandlerResult<Vec<&Record>> {
        let until = today
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                HandlerError::invalid_value(format!("{days} days from today is out of date range"))
            })?;
        let mut upcoming: Vec<(NaiveDate, &Record)> = self
            .records
            .values()
            .filter_map(|r| {
                let next = r.birthday?.next_after(today);
                (next <= until).then_some((next, r))
            })
            .collect();
        upcoming.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));
        Ok(upcoming.into_iter().map(|(_, r)| r).collect())
    }
}
