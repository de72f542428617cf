//! Splits an input line into a command keyword and its parameters.
//!
//! Keywords are matched as case-insensitive literal prefixes of the line,
//! in command table order; the first match wins. Exactly the keyword's
//! length is removed from the front of the line and the rest is split on
//! whitespace. No quoting or escaping is recognised.

use super::definitions::CommandDef;

/// Result of tokenizing one input line.
#[derive(Debug, Clone)]
pub struct ParsedCommand<'a> {
    /// The matched command, or `None` if no keyword prefixes the line.
    pub command: Option<&'a CommandDef>,
    /// Whitespace-separated parameters after the keyword. Empty when no
    /// command matched.
    pub params: Vec<String>,
}

impl ParsedCommand<'_> {
    /// Keyword of the matched command.
    pub fn name(&self) -> Option<&'static str> {
        self.command.map(|cmd| cmd.name)
    }
}

/// Returns true if `line` starts with `keyword`, ignoring ASCII case.
fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.get(..keyword.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
}

/// Tokenizes `line` against `table`.
///
/// Pure: the result depends only on the two arguments.
pub fn parse_line<'a>(line: &str, table: &'a [CommandDef]) -> ParsedCommand<'a> {
    for cmd in table {
        if starts_with_keyword(line, cmd.name) {
            let rest = &line[cmd.name.len()..];
            return ParsedCommand {
                command: Some(cmd),
                params: rest.split_whitespace().map(str::to_string).collect(),
            };
        }
    }

    ParsedCommand {
        command: None,
        params: Vec::new(),
    }
}
