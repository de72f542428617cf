//! Note book handlers.

use tracing::info;

use super::Params;
use crate::commands::output::CommandOutput;
use crate::error::HandlerResult;
use crate::notes::{parse_tags, title_of, Note};
use crate::session::Session;

const EMPTY_NOTE_BOOK: &str = "Note book is empty";

fn list(notes: Vec<&Note>, empty: impl Into<String>) -> CommandOutput {
    if notes.is_empty() {
        return CommandOutput::info(empty);
    }
    let blocks: Vec<String> = notes.iter().map(ToString::to_string).collect();
    CommandOutput::info(blocks.join("\n\n"))
}

/// Handle note_add: text, then tags.
///
/// On a single line only the first word is the text and the rest are tags;
/// a longer text is given at the prompt.
pub fn note_add(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let text = params.required(0, "text")?;
    let tags = params
        .as_slice()
        .get(1..)
        .map(|rest| parse_tags(&rest.join(" ")))
        .unwrap_or_default();

    let note = Note::new(text, tags, session.today())?;
    let tagged = !note.tags.is_empty();
    info!("Adding note \"{}\"", note.title());
    session.notes.add_note(note)?;
    session.save_notes()?;

    Ok(CommandOutput::info(if tagged {
        "New note with tags added"
    } else {
        "New note added"
    }))
}

/// Handle note_delete: title (only the first 20 characters count).
pub fn note_delete(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let title = title_of(&params.joined_from(0, "title")?);
    if session.notes.get(&title).is_none() {
        return Ok(CommandOutput::info(format!(
            "I can not delete the note. There is no note with title \"{title}\"."
        )));
    }
    session.notes.delete_note(&title)?;
    session.save_notes()?;
    Ok(CommandOutput::info("Note deleted successfully"))
}

/// Handle note_edit: title, then the new text.
pub fn note_edit(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let title = title_of(params.required(0, "title")?);
    if session.notes.get(&title).is_none() {
        return Ok(CommandOutput::info(format!(
            "I can not change the note. There is no note with title \"{title}\"."
        )));
    }
    let new_text = params.joined_from(1, "new text")?;
    session.notes.edit_note(&title, &new_text)?;
    session.save_notes()?;
    Ok(CommandOutput::info("Note changed successfully"))
}

/// Handle note_show_all.
pub fn note_show_all(session: &mut Session, _params: &Params) -> HandlerResult<CommandOutput> {
    Ok(list(session.notes.iter().collect(), EMPTY_NOTE_BOOK))
}

/// Handle tag_search: tag.
pub fn tag_search(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let tag = params.required(0, "tag")?;
    let found = session.notes.search_by_tag(tag);
    Ok(list(
        found,
        format!("No notes with tag #{}", tag.trim_start_matches('#')),
    ))
}

/// Handle tag_sort.
pub fn tag_sort(session: &mut Session, _params: &Params) -> HandlerResult<CommandOutput> {
    Ok(list(session.notes.sort_by_tags(), EMPTY_NOTE_BOOK))
}

/// Handle word_search: word.
pub fn word_search(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let word = params.required(0, "word")?;
    Ok(list(session.notes.find_text(word), "Nothing found"))
}
