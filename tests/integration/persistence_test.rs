//! Integration tests for the JSON stores.

use chrono::NaiveDate;
use pawbook::contacts::{Address, AddressBook, Birthday, Email, Phone, Record};
use pawbook::error::AssistantError;
use pawbook::notes::{parse_tags, Note, NoteBook};
use pawbook::persistence::{Loadable, Savable};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn test_empty_books_round_trip() {
    let dir = tempdir().unwrap();
    let contacts = dir.path().join("contacts.json");
    let notes = dir.path().join("notes.json");

    AddressBook::new().save_to(&contacts).unwrap();
    NoteBook::new().save_to(&notes).unwrap();

    assert!(contacts.exists());
    assert!(AddressBook::load_from(&contacts).unwrap().is_empty());
    assert!(NoteBook::load_from(&notes).unwrap().is_empty());
}

#[test]
fn test_full_contact_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    let mut bob = Record::new("Bob Smith")
        .unwrap()
        .with_birthday(Birthday::parse("21-10-1990", today()).unwrap())
        .with_email(Email::parse("bob@example.com").unwrap())
        .with_address(Address::parse("Kyiv, Khreshchatyk 1").unwrap());
    bob.add_phone(Phone::parse("0501234567").unwrap()).unwrap();
    bob.add_phone(Phone::parse("0671112233").unwrap()).unwrap();

    let mut book = AddressBook::new();
    book.add_record(bob).unwrap();
    book.save_to(&path).unwrap();

    let loaded = AddressBook::load_from(&path).unwrap();
    assert_eq!(loaded, book);
    assert_eq!(loaded.get("Bob Smith").unwrap().phones.len(), 2);
}

#[test]
fn test_notes_keep_tags_and_dates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let mut book = NoteBook::new();
    book.add_note(Note::new("Feed the cat twice a day", parse_tags("#Cat home"), today()).unwrap())
        .unwrap();
    book.add_note(Note::new("Buy milk", Vec::new(), today()).unwrap())
        .unwrap();
    book.save_to(&path).unwrap();

    let loaded = NoteBook::load_from(&path).unwrap();
    assert_eq!(loaded, book);
    let note = loaded.get("Feed the cat twice a").unwrap();
    assert_eq!(note.tags, vec!["cat", "home"]);
    assert_eq!(note.created, today());
}

#[test]
fn test_corrupt_store_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    fs::write(&path, "{ not json").unwrap();

    let err = AddressBook::load_from(&path).unwrap_err();

    assert!(matches!(err, AssistantError::Persistence(_)));
    assert!(err.to_string().contains("contacts.json"));
}

#[test]
fn test_save_overwrites_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let mut book = NoteBook::new();
    book.add_note(Note::new("First", Vec::new(), today()).unwrap())
        .unwrap();
    book.save_to(&path).unwrap();

    book.delete_note("First").unwrap();
    book.save_to(&path).unwrap();

    assert!(NoteBook::load_from(&path).unwrap().is_empty());
}
