//! Persistence layer for Pawbook.
//!
//! Each store is a single JSON file that is overwritten whole after every
//! successful mutation. A store whose file does not exist yet loads empty.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::contacts::AddressBook;
use crate::error::{AssistantError, Result};
use crate::notes::NoteBook;

/// A store that can be read back from a file.
pub trait Loadable: Sized {
    /// Loads the store at `path`; a missing file yields an empty store.
    fn load_from(path: &Path) -> Result<Self>;
}

/// A store that can be written to a file.
pub trait Savable {
    /// Overwrites `path` with the current contents of the store.
    fn save_to(&self, path: &Path) -> Result<()>;
}

fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No store at {}, starting empty", path.display());
            return Ok(T::default());
        }
        Err(e) => {
            return Err(AssistantError::persistence(format!(
                "Failed to read {}: {e}",
                path.display()
            )))
        }
    };

    if content.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(&content).map_err(|e| {
        AssistantError::persistence(format!("Failed to parse {}: {e}", path.display()))
    })
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AssistantError::persistence(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let content = serde_json::to_string_pretty(value).map_err(|e| {
        AssistantError::persistence(format!("Failed to encode {}: {e}", path.display()))
    })?;
    fs::write(path, content).map_err(|e| {
        AssistantError::persistence(format!("Failed to write {}: {e}", path.display()))
    })
}

impl Loadable for AddressBook {
    fn load_from(path: &Path) -> Result<Self> {
        let book: Self = load_json(path)?;
        info!("Loaded {} contact(s) from {}", book.len(), path.display());
        Ok(book)
    }
}

impl Savable for AddressBook {
    fn save_to(&self, path: &Path) -> Result<()> {
        save_json(self, path)?;
        debug!("Saved {} contact(s) to {}", self.len(), path.display());
        Ok(())
    }
}

impl Loadable for NoteBook {
    fn load_from(path: &Path) -> Result<Self> {
        let book: Self = load_json(path)?;
        info!("Loaded {} note(s) from {}", book.len(), path.display());
        Ok(book)
    }
}

impl Savable for NoteBook {
    fn save_to(&self, path: &Path) -> Result<()> {
        save_json(self, path)?;
        debug!("Saved {} note(s) to {}", self.len(), path.display());
        Ok(())
    }
}
