//! Core orchestrator for Pawbook.
//!
//! Owns the command table and the session, and runs one input line through
//! the tokenizer, resolver and invocation wrapper.

use tracing::info;

use crate::commands::{self, CommandDef, CommandOutput, Resolution, COMMANDS};
use crate::error::Result;
use crate::session::Session;

/// The assistant: a command table bound to a session.
pub struct Assistant {
    table: &'static [CommandDef],
    session: Session,
}

impl Assistant {
    /// Creates an assistant over the built-in command table. The session is
    /// used as given; call [`Assistant::load`] to read the stores.
    pub fn new(session: Session) -> Self {
        Self::with_table(COMMANDS, session)
    }

    /// Creates an assistant over a custom command table.
    pub fn with_table(table: &'static [CommandDef], session: Session) -> Self {
        Self { table, session }
    }

    /// Creates an assistant and loads both stores from disk.
    pub fn start(session: Session) -> Result<Self> {
        let mut assistant = Self::new(session);
        assistant.load()?;
        Ok(assistant)
    }

    /// Loads the contact and note stores. Missing files give empty stores.
    pub fn load(&mut self) -> Result<()> {
        self.session.load()?;
        info!(
            "Loaded {} contact(s) and {} note(s)",
            self.session.contacts.len(),
            self.session.notes.len()
        );
        Ok(())
    }

    pub fn table(&self) -> &'static [CommandDef] {
        self.table
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Tokenizes and resolves one line. Never fails.
    pub fn resolve(&self, line: &str) -> Resolution<'static> {
        let parsed = commands::parse_line(line, self.table);
        commands::resolve(parsed, line, self.table)
    }

    /// Runs a resolved command. Only fatal errors are returned as `Err`.
    pub async fn run(&mut self, def: &CommandDef, params: Vec<String>) -> Result<CommandOutput> {
        commands::invoke(def, &mut self.session, params).await
    }

    /// Handles one line without soliciting missing parameters.
    ///
    /// Returns `None` for a blank line.
    pub async fn handle_line(&mut self, line: &str) -> Result<Option<CommandOutput>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        match self.resolve(line) {
            Resolution::Command { def, params } => self.run(def, params).await.map(Some),
            Resolution::Unknown(message) => Ok(Some(CommandOutput::Info(message))),
        }
    }
}
