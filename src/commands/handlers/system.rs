//! System command handlers (hello, help, exit).

use super::Params;
use crate::commands::definitions::{CommandCategory, COMMANDS};
use crate::commands::help::{help_table, help_topics};
use crate::commands::output::CommandOutput;
use crate::error::{HandlerError, HandlerResult};
use crate::session::Session;

pub const GREETING: &str = "Meow! How can I help you?\nType \"help\" to show help";
pub const FAREWELL: &str = "Good bye!";

/// Handle hello.
pub fn hello(_session: &mut Session, _params: &Params) -> HandlerResult<CommandOutput> {
    Ok(CommandOutput::info(GREETING))
}

/// Handle help, optionally narrowed to one topic.
pub fn help(_session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let Some(topic) = params.optional(0) else {
        return Ok(help_table(COMMANDS, None));
    };
    let category = CommandCategory::from_keyword(topic).ok_or_else(|| {
        HandlerError::not_found(format!("help topic '{topic}'. Topics: {}", help_topics()))
    })?;
    Ok(help_table(COMMANDS, Some(category)))
}

/// Handle exit.
pub fn exit(_session: &mut Session, _params: &Params) -> HandlerResult<CommandOutput> {
    Ok(CommandOutput::Exit(FAREWELL.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn session(dir: &std::path::Path) -> Session {
        Session::for_testing(dir, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    fn params(values: &[&str]) -> Params {
        Params::new("help", values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_hello() {
        let dir = tempdir().unwrap();
        let out = hello(&mut session(dir.path()), &params(&[])).unwrap();
        assert_eq!(out.render(), GREETING);
    }

    #[test]
    fn test_help_all_and_by_topic() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());

        let all = help(&mut session, &params(&[])).unwrap().render();
        assert!(all.contains("Known commands"));
        assert!(all.contains("weather <city>"));

        let contacts = help(&mut session, &params(&["contacts"])).unwrap().render();
        assert!(contacts.contains("add_contact"));
        assert!(!contacts.contains("note_add"));
    }

    #[test]
    fn test_help_unknown_topic() {
        let dir = tempdir().unwrap();
        let err = help(&mut session(dir.path()), &params(&["cats"])).unwrap_err();
        assert!(matches!(err, HandlerError::NotFound(_)));
        assert!(err.to_string().contains("general, contacts, notes, utilities"));
    }

    #[test]
    fn test_exit() {
        let dir = tempdir().unwrap();
        let out = exit(&mut session(dir.path()), &params(&[])).unwrap();
        assert_eq!(out, CommandOutput::Exit("Good bye!".to_string()));
    }
}
