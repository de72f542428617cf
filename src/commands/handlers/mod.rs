//! Command handlers for Pawbook.
//!
//! Every command is bound to a [`Handler`]. Most handlers are plain functions
//! of `(session, params)` wrapped in [`SyncHandler`]; only the weather lookup
//! needs to await.

pub mod calendar;
pub mod contacts;
pub mod files;
pub mod notes;
pub mod system;
pub mod weather;

use async_trait::async_trait;

use super::output::CommandOutput;
use crate::error::{HandlerError, HandlerResult};
use crate::session::Session;

/// Positional parameters of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    command: &'static str,
    values: Vec<String>,
}

impl Params {
    pub fn new(command: &'static str, values: Vec<String>) -> Self {
        Self { command, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    /// Parameter at `index`, or an arity failure naming what was expected.
    pub fn required(&self, index: usize, name: &str) -> HandlerResult<&str> {
        self.values.get(index).map(String::as_str).ok_or_else(|| {
            HandlerError::missing_param(format!(
                "{} needs <{name}> at position {}, got {} param(s)",
                self.command,
                index + 1,
                self.values.len()
            ))
        })
    }

    /// Parameter at `index`, treating a blank value as absent.
    pub fn optional(&self, index: usize) -> Option<&str> {
        self.values
            .get(index)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Parameters from `index` on joined by single spaces, or an arity
    /// failure if there are none.
    pub fn joined_from(&self, index: usize, name: &str) -> HandlerResult<String> {
        self.required(index, name)?;
        Ok(self.values[index..].join(" "))
    }
}

/// A command implementation.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs the command. Returning a recovered [`HandlerError`] kind produces
    /// a message; `HandlerError::Fatal` ends the session.
    async fn call(&self, session: &mut Session, params: &Params) -> HandlerResult<CommandOutput>;
}

/// Signature of a synchronous handler function.
pub type HandlerFn = fn(&mut Session, &Params) -> HandlerResult<CommandOutput>;

/// Adapts a plain function to [`Handler`].
pub struct SyncHandler(pub HandlerFn);

#[async_trait]
impl Handler for SyncHandler {
    async fn call(&self, session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
        (self.0)(session, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Params {
        Params::new("change_phone", values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_required_present() {
        let p = params(&["Tom", "0501234567"]);
        assert_eq!(p.required(1, "old").unwrap(), "0501234567");
    }

    #[test]
    fn test_required_missing_is_arity_failure() {
        let p = params(&["Tom"]);
        let err = p.required(1, "old").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sorry, not enough params for command. Error: change_phone needs <old> at position 2, got 1 param(s)"
        );
    }

    #[test]
    fn test_optional_treats_blank_as_absent() {
        let p = params(&["Tom", "  ", "x"]);
        assert_eq!(p.optional(0), Some("Tom"));
        assert_eq!(p.optional(1), None);
        assert_eq!(p.optional(5), None);
    }

    #[test]
    fn test_joined_from() {
        let p = params(&["New", "York"]);
        assert_eq!(p.joined_from(0, "city").unwrap(), "New York");
        assert!(params(&[]).joined_from(0, "city").is_err());
    }
}
