//! Console tests: scripted stdin, captured stdout.

use chrono::NaiveDate;
use pawbook::app::Assistant;
use pawbook::console::{Console, SessionEnd, PROMPT};
use pawbook::session::Session;
use std::io::Cursor;
use tempfile::tempdir;

async fn run(script: &str) -> (SessionEnd, String, Assistant, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let mut assistant = Assistant::start(Session::for_testing(dir.path(), today)).unwrap();

    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let end = console.run(&mut assistant).await.unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();
    (end, out, assistant, dir)
}

#[tokio::test]
async fn test_full_conversation() {
    let script = "\
hello
add_contact Bob 0501234567



note_add
Feed the cat
#cat
note_show_all
holiday 0
exit
";
    let (end, out, assistant, _dir) = run(script).await;

    assert_eq!(end, SessionEnd::Exit);
    assert!(out.starts_with(PROMPT));
    assert!(out.contains("Meow! How can I help you?"));
    assert!(out.contains("Contact add successfully"));
    assert!(out.contains("Input text for the note: "));
    assert!(out.contains("Tags: #cat"));
    assert!(out.contains("No holiday today"));
    assert!(out.ends_with("Good bye!\n"));
    assert_eq!(assistant.session().contacts.len(), 1);
    assert_eq!(assistant.session().notes.len(), 1);
}

#[tokio::test]
async fn test_every_prompt_of_note_edit() {
    let script = "note_add Groceries\n\nnote_edit\nGroceries\nGroceries and fish\nexit\n";
    let (_, out, assistant, _dir) = run(script).await;

    assert!(out.contains("Input the new text of note: "));
    assert!(out.contains("Note changed successfully"));
    assert!(assistant.session().notes.get("Groceries and fish").is_some());
}

#[tokio::test]
async fn test_errors_do_not_end_the_session() {
    let script = "birthday\nfoo\nnote_delete nothing here\nweather Atlantis\nhello\n";
    let (end, out, _, _dir) = run(script).await;

    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(out.contains("Sorry, not enough params for command."));
    assert!(out.contains("Sorry, I don't know this command."));
    assert!(out.contains("I can not delete the note."));
    assert!(out.contains("Not found. Error: city 'Atlantis'"));
    assert!(out.contains("Meow!"));
}

#[tokio::test]
async fn test_windows_line_endings() {
    let (end, out, _, _dir) = run("hello\r\nexit\r\n").await;
    assert_eq!(end, SessionEnd::Exit);
    assert!(out.contains("Meow!"));
}
