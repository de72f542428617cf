//! Error types for Pawbook.
//!
//! Two layers live here:
//! - [`AssistantError`] is the fatal error: anything the console loop cannot
//!   recover from (unreadable config, failed save, broken store file).
//! - [`HandlerError`] is what command handlers return. Its four recovered
//!   kinds render to the fixed user-facing messages; `Fatal` carries an
//!   [`AssistantError`] through the invocation wrapper untouched.

use thiserror::Error;

/// Main error type for Pawbook operations.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Configuration errors (invalid config file, bad override value, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store load/save errors (corrupt file, failed write, etc.)
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Console I/O errors (stdin closed mid-read, stdout gone, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Weather client construction errors.
    #[error("Weather error: {0}")]
    Weather(String),
}

impl AssistantError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a persistence error with the given message.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Creates a weather error with the given message.
    pub fn weather(msg: impl Into<String>) -> Self {
        Self::Weather(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Persistence(_) => "Persistence Error",
            Self::Io(_) => "I/O Error",
            Self::Weather(_) => "Weather Error",
        }
    }
}

impl From<std::io::Error> for AssistantError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Result type alias using AssistantError.
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Failure returned by a command handler.
///
/// The `Display` text of the first four variants is exactly what the user
/// sees; the invocation wrapper turns them into replies.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A requested name or key does not exist in a store.
    #[error("Not found. Error: {0}")]
    NotFound(String),

    /// The handler needed a positional parameter that was not supplied.
    #[error("Sorry, not enough params for command. Error: {0}")]
    MissingParam(String),

    /// A supplied parameter failed semantic validation.
    #[error("Value error: {0}")]
    InvalidValue(String),

    /// The caller passed the wrong number of arguments to a fixed-arity handler.
    #[error("Not enough arguments. Error: {0}")]
    ArgumentMismatch(String),

    /// Anything outside the recovered set. Never turned into a reply.
    #[error(transparent)]
    Fatal(#[from] AssistantError),
}

impl HandlerError {
    /// Creates a lookup failure.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    /// Creates an arity failure.
    pub fn missing_param(detail: impl Into<String>) -> Self {
        Self::MissingParam(detail.into())
    }

    /// Creates a value-validity failure.
    pub fn invalid_value(detail: impl Into<String>) -> Self {
        Self::InvalidValue(detail.into())
    }

    /// Creates a call-boundary argument-count failure.
    pub fn argument_mismatch(detail: impl Into<String>) -> Self {
        Self::ArgumentMismatch(detail.into())
    }
}

/// Result type alias for command handlers.
pub type HandlerResult<T> = std::result::Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = AssistantError::config("missing field 'contacts' in storage");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing field 'contacts' in storage"
        );
        assert_eq!(err.category(), "Configuration Error");
    }

    #[test]
    fn test_error_display_persistence() {
        let err = AssistantError::persistence("notes.json: expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Persistence error: notes.json: expected value at line 1"
        );
        assert_eq!(err.category(), "Persistence Error");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AssistantError = io.into();
        assert_eq!(err.category(), "I/O Error");
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_handler_error_templates() {
        assert_eq!(
            HandlerError::not_found("'Bob'").to_string(),
            "Not found. Error: 'Bob'"
        );
        assert_eq!(
            HandlerError::missing_param("list index out of range").to_string(),
            "Sorry, not enough params for command. Error: list index out of range"
        );
        assert_eq!(
            HandlerError::invalid_value("bad date").to_string(),
            "Value error: bad date"
        );
        assert_eq!(
            HandlerError::argument_mismatch("takes 1 positional argument but 2 were given")
                .to_string(),
            "Not enough arguments. Error: takes 1 positional argument but 2 were given"
        );
    }

    #[test]
    fn test_fatal_wraps_assistant_error() {
        let err: HandlerError = AssistantError::persistence("disk full").into();
        assert!(matches!(err, HandlerError::Fatal(AssistantError::Persistence(_))));
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssistantError>();
        assert_send_sync::<HandlerError>();
    }
}
