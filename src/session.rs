//! Mutable state shared by command handlers.
//!
//! One `Session` lives for the whole process and is handed to each handler
//! in turn; handlers never run concurrently, so it needs no locking.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use crate::config::StorageConfig;
use crate::contacts::AddressBook;
use crate::error::{HandlerResult, Result};
use crate::holidays::{HolidayCalendar, UkrainianCalendar};
use crate::notes::NoteBook;
use crate::persistence::{Loadable, Savable};
use crate::weather::{MockWeatherProvider, WeatherProvider};

/// Source of "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one day, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Everything a handler may read or change.
pub struct Session {
    pub contacts: AddressBook,
    pub notes: NoteBook,
    pub storage: StorageConfig,
    pub weather: Box<dyn WeatherProvider>,
    pub holidays: Box<dyn HolidayCalendar>,
    pub clock: Box<dyn Clock>,
}

impl Session {
    /// Creates a session with empty books and the given collaborators.
    pub fn new(
        storage: StorageConfig,
        weather: Box<dyn WeatherProvider>,
        holidays: Box<dyn HolidayCalendar>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            contacts: AddressBook::new(),
            notes: NoteBook::new(),
            storage,
            weather,
            holidays,
            clock,
        }
    }

    /// A session for tests: stores under `dir`, mock weather, Ukrainian
    /// holidays and a fixed date.
    pub fn for_testing(dir: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let dir = dir.into();
        Self::new(
            StorageConfig {
                contacts: dir.join("contacts.json"),
                notes: dir.join("notes.json"),
            },
            Box::new(MockWeatherProvider::new()),
            Box::new(UkrainianCalendar),
            Box::new(FixedClock(today)),
        )
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Loads both books from their configured files.
    pub fn load(&mut self) -> Result<()> {
        self.contacts = AddressBook::load_from(&self.storage.contacts)?;
        self.notes = NoteBook::load_from(&self.storage.notes)?;
        Ok(())
    }

    /// Writes the contact book through to disk.
    pub fn save_contacts(&self) -> HandlerResult<()> {
        self.contacts.save_to(&self.storage.contacts)?;
        Ok(())
    }

    /// Writes the note book through to disk.
    pub fn save_notes(&self) -> HandlerResult<()> {
        self.notes.save_to(&self.storage.notes)?;
        Ok(())
    }
}
