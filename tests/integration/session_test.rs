//! Integration tests for the assistant: whole conversations over one
//! session, and the same stores read back by a fresh session.

use chrono::NaiveDate;
use pawbook::app::Assistant;
use pawbook::contacts::AddressBook;
use pawbook::error::AssistantError;
use pawbook::persistence::Loadable;
use pawbook::session::Session;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn start(dir: &Path) -> Assistant {
    Assistant::start(Session::for_testing(dir, today())).unwrap()
}

async fn say(assistant: &mut Assistant, line: &str) -> String {
    assistant
        .handle_line(line)
        .await
        .unwrap()
        .map(|out| out.render())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_contact_lifecycle() {
    let dir = tempdir().unwrap();
    let mut assistant = start(dir.path());

    assert_eq!(
        say(&mut assistant, "add_contact Bob 0501234567 21-10-1990").await,
        "Contact add successfully"
    );
    assert_eq!(
        say(&mut assistant, "add_contact Bob 0671112233").await,
        "New number added to Bob"
    );
    assert_eq!(
        say(&mut assistant, "change_phone Bob 0671112233 0939998877").await,
        "Contact change successfully"
    );
    assert_eq!(
        say(&mut assistant, "delete_phone Bob 0501234567").await,
        "Phone number deleted successfully"
    );

    let shown = say(&mut assistant, "show_all").await;
    assert!(shown.contains("| Bob "));
    assert!(shown.contains("0939998877"));
    assert!(!shown.contains("0501234567"));

    let birthdays = say(&mut assistant, "birthday 3").await;
    assert!(birthdays.contains("21-10-1990"));

    assert_eq!(
        say(&mut assistant, "contact_delete Bob").await,
        "User with name Bob was deleted"
    );
    assert_eq!(say(&mut assistant, "show_all").await, "Contact list is empty");
    assert!(AddressBook::load_from(&dir.path().join("contacts.json"))
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_note_lifecycle() {
    let dir = tempdir().unwrap();
    let mut assistant = start(dir.path());

    assert_eq!(
        say(&mut assistant, "note_add Groceries milk").await,
        "New note with tags added"
    );
    assert_eq!(say(&mut assistant, "note_add Vet").await, "New note added");

    assert!(say(&mut assistant, "tag_search milk").await.contains("Groceries"));
    assert_eq!(
        say(&mut assistant, "tag_search fish").await,
        "No notes with tag #fish"
    );
    assert_eq!(say(&mut assistant, "word_search dentist").await, "Nothing found");

    assert_eq!(
        say(&mut assistant, "note_edit Vet Vet on Friday").await,
        "Note changed successfully"
    );
    assert!(say(&mut assistant, "word_search friday").await.contains("Vet on Friday"));

    let sorted = say(&mut assistant, "tag_sort").await;
    let groceries = sorted.find("Groceries").unwrap();
    let vet = sorted.find("Vet on Friday").unwrap();
    assert!(groceries < vet, "tagged notes come first:\n{sorted}");

    assert_eq!(
        say(&mut assistant, "note_delete Groceries").await,
        "Note deleted successfully"
    );
    assert!(say(&mut assistant, "note_delete Groceries")
        .await
        .starts_with("I can not delete the note."));
}

#[tokio::test]
async fn test_stores_survive_restart() {
    let dir = tempdir().unwrap();
    {
        let mut first = start(dir.path());
        say(&mut first, "add_contact Ann 0501234567").await;
        say(&mut first, "note_add Call Ann back").await;
    }

    let mut second = start(dir.path());

    assert_eq!(second.session().contacts.len(), 1);
    assert_eq!(second.session().notes.len(), 1);
    let note = second.session().notes.get("Call").unwrap();
    assert_eq!(note.text, "Call");
    assert_eq!(note.tags, vec!["ann", "back"]);
    assert!(say(&mut second, "phone Ann").await.contains("0501234567"));
}

#[tokio::test]
async fn test_recovered_errors_keep_the_session_alive() {
    let dir = tempdir().unwrap();
    let mut assistant = start(dir.path());

    let replies = [
        say(&mut assistant, "add_contact Bob 12").await,
        say(&mut assistant, "birthday soon").await,
        say(&mut assistant, "contact_delete Nobody").await,
        say(&mut assistant, "hello there").await,
    ];

    assert!(replies[0].starts_with("Value error: "), "{}", replies[0]);
    assert!(replies[1].starts_with("Value error: "), "{}", replies[1]);
    assert!(replies[2].starts_with("Not found. Error: "), "{}", replies[2]);
    assert!(replies[3].starts_with("Not enough arguments. Error: "), "{}", replies[3]);
    assert!(assistant.session().contacts.is_empty());
    assert!(say(&mut assistant, "hello").await.starts_with("Meow!"));
}

#[tokio::test]
async fn test_help_lists_every_command() {
    let dir = tempdir().unwrap();
    let mut assistant = start(dir.path());

    let help = say(&mut assistant, "help").await;
    for def in assistant.table() {
        assert!(help.contains(def.name), "help is missing {}", def.name);
    }

    let notes = say(&mut assistant, "help notes").await;
    assert!(notes.contains("note_add"));
    assert!(!notes.contains("add_contact"));
}

#[tokio::test]
async fn test_corrupt_store_fails_start() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.json"), "[[[").unwrap();

    let err = Assistant::start(Session::for_testing(dir.path(), today()))
        .err()
        .expect("start should fail");

    assert!(matches!(err, AssistantError::Persistence(_)));
}
