//! Line-oriented console.
//!
//! Reads commands from any buffered reader, asks for the parameters a
//! command declares prompts for, and writes replies. Generic over reader and
//! writer so scripted sessions can be tested without a terminal.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::app::Assistant;
use crate::commands::handlers::system::FAREWELL;
use crate::commands::Resolution;
use crate::error::Result;

/// Marker printed before each command line.
pub const PROMPT: &str = ">>> ";

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user ran `exit`.
    Exit,
    /// Input ran out.
    EndOfInput,
}

/// Interactive console over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Runs until `exit` or end of input. Fatal errors end the session.
    pub async fn run(&mut self, assistant: &mut Assistant) -> Result<SessionEnd> {
        loop {
            let Some(line) = self.ask(PROMPT)? else {
                return self.end_of_input();
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (def, mut params) = match assistant.resolve(line) {
                Resolution::Command { def, params } => (def, params),
                Resolution::Unknown(message) => {
                    self.say(&message)?;
                    continue;
                }
            };

            for label in def.prompts.iter().skip(params.len()) {
                match self.ask(label)? {
                    Some(answer) => params.push(answer.trim().to_string()),
                    None => return self.end_of_input(),
                }
            }

            let output = assistant.run(def, params).await?;
            self.say(&output.render())?;
            if output.is_exit() {
                info!("Session ended by {}", def.name);
                return Ok(SessionEnd::Exit);
            }
        }
    }

    fn end_of_input(&mut self) -> Result<SessionEnd> {
        debug!("End of input");
        writeln!(self.output)?;
        self.say(FAREWELL)?;
        Ok(SessionEnd::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    fn assistant() -> (TempDir, Assistant) {
        let dir = tempdir().unwrap();
        let session =
            Session::for_testing(dir.path(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        (dir, Assistant::start(session).unwrap())
    }

    async fn run_script(assistant: &mut Assistant, script: &str) -> (SessionEnd, String) {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let end = console.run(assistant).await.unwrap();
        (end, String::from_utf8(console.into_output()).unwrap())
    }

    #[tokio::test]
    async fn test_exit_ends_session() {
        let (_dir, mut assistant) = assistant();
        let (end, out) = run_script(&mut assistant, "hello\nexit\nhello\n").await;

        assert_eq!(end, SessionEnd::Exit);
        assert_eq!(out.matches("Meow!").count(), 1);
        assert!(out.ends_with("Good bye!\n"));
    }

    #[tokio::test]
    async fn test_end_of_input_says_good_bye() {
        let (_dir, mut assistant) = assistant();
        let (end, out) = run_script(&mut assistant, "\n   \nshow_all").await;

        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains("Contact list is empty"));
        assert!(out.ends_with("Good bye!\n"));
    }

    #[tokio::test]
    async fn test_prompts_fill_missing_params() {
        let (_dir, mut assistant) = assistant();
        let script = "add_contact\nBob Smith\n050 123 45 67\n21-10-1990\n\n\nexit\n";

        let (_, out) = run_script(&mut assistant, script).await;

        assert!(out.contains("Input contact name: "));
        assert!(out.contains("Input address: "));
        assert!(out.contains("Contact add successfully"));
        let bob = assistant.session().contacts.get("Bob Smith").unwrap();
        assert_eq!(bob.phones_joined(), "0501234567");
        assert!(bob.email.is_none());
    }

    #[tokio::test]
    async fn test_inline_params_skip_their_prompts() {
        let (_dir, mut assistant) = assistant();
        let script = "note_add\nFeed the cat\ncat home\nnote_delete Feed the cat\nexit\n";

        let (_, out) = run_script(&mut assistant, script).await;

        assert!(out.contains("New note with tags added"));
        assert!(!out.contains("for deleting"));
        assert!(out.contains("Note deleted successfully"));
        assert!(assistant.session().notes.is_empty());
    }

    #[tokio::test]
    async fn test_end_of_input_while_prompting() {
        let (_dir, mut assistant) = assistant();
        let (end, out) = run_script(&mut assistant, "note_add\nhalf a note").await;

        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains("Input tags for the note: "));
        assert!(assistant.session().notes.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_command_reply() {
        let (_dir, mut assistant) = assistant();
        let (_, out) = run_script(&mut assistant, "shwo_all\nexit\n").await;
        assert!(out.contains("Maybe you mean: show_all"));
    }
}
