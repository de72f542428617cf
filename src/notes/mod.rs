//! The note book.
//!
//! A note is addressed by its title: the first [`TITLE_LEN`] characters of
//! its text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{HandlerError, HandlerResult};

/// Number of leading characters of a note's text that form its title.
pub const TITLE_LEN: usize = 20;

/// Returns the title for a piece of text (or for a user-typed title prefix).
pub fn title_of(text: &str) -> String {
    text.trim().chars().take(TITLE_LEN).collect()
}

/// Splits a raw tag line into normalised tags.
///
/// Tags are lowercased, a leading `#` is dropped and duplicates are removed
/// keeping first occurrence order.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split_whitespace() {
        let tag = tag.trim_start_matches('#').to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// A single note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created: NaiveDate,
}

impl Note {
    pub fn new(text: &str, tags: Vec<String>, created: NaiveDate) -> HandlerResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(HandlerError::invalid_value("note text must not be empty"));
        }
        Ok(Self {
            text: text.to_string(),
            tags,
            created,
        })
    }

    pub fn title(&self) -> String {
        title_of(&self.text)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim_start_matches('#').to_lowercase();
        self.tags.iter().any(|t| *t == tag)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.created.format("%d-%m-%Y"), self.title())?;
        writeln!(f, "{}", self.text)?;
        if self.tags.is_empty() {
            write!(f, "Tags: -")
        } else {
            let tags: Vec<String> = self.tags.iter().map(|t| format!("#{t}")).collect();
            write!(f, "Tags: {}", tags.join(" "))
        }
    }
}

/// All notes, keyed by title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBook {
    notes: BTreeMap<String, Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Note> {
        self.notes.get(title)
    }

    pub fn add_note(&mut self, note: Note) -> HandlerResult<()> {
        let title = note.title();
        if self.notes.contains_key(&title) {
            return Err(HandlerError::invalid_value(format!(
                "a note titled \"{title}\" already exists"
            )));
        }
        self.notes.insert(title, note);
        Ok(())
    }

    pub fn delete_note(&mut self, title: &str) -> HandlerResult<Note> {
        self.notes
            .remove(title)
            .ok_or_else(|| HandlerError::not_found(format!("\"{title}\"")))
    }

    /// Replaces the text of a note, moving it under its new title.
    pub fn edit_note(&mut self, title: &str, new_text: &str) -> HandlerResult<()> {
        let note = self
            .notes
            .get(title)
            .ok_or_else(|| HandlerError::not_found(format!("\"{title}\"")))?;
        let edited = Note::new(new_text, note.tags.clone(), note.created)?;
        let new_title = edited.title();
        if new_title != title && self.notes.contains_key(&new_title) {
            return Err(HandlerError::invalid_value(format!(
                "a note titled \"{new_title}\" already exists"
            )));
        }
        self.notes.remove(title);
        self.notes.insert(new_title, edited);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Notes whose text contains `word`, case-insensitively.
    pub fn find_text(&self, word: &str) -> Vec<&Note> {
        let needle = word.to_lowercase();
        self.notes
            .values()
            .filter(|n| n.text.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.values().filter(|n| n.has_tag(tag)).collect()
    }

    /// Tagged notes ordered by their sorted tag lists, untagged notes last.
    pub fn sort_by_tags(&self) -> Vec<&Note> {
        let mut keyed: Vec<(Vec<String>, &Note)> = self
            .notes
            .values()
            .map(|n| {
                let mut tags = n.tags.clone();
                tags.sort();
                (tags, n)
            })
            .collect();
        keyed.sort_by(|(a, _), (b, _)| match (a.is_empty(), b.is_empty()) {
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            _ => a.cmp(b),
        });
        keyed.into_iter().map(|(_, n)| n).collect()
    }
}
