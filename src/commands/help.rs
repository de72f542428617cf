//! Help output, generated from the command table.

use super::definitions::{CommandCategory, CommandDef};
use super::output::CommandOutput;

pub const HELP_HEADERS: [&str; 2] = ["Known commands", "Description"];

/// Help table for every command in `table`, or only those in `category`.
pub fn help_table(table: &[CommandDef], category: Option<CommandCategory>) -> CommandOutput {
    let rows = table
        .iter()
        .filter(|cmd| category.map_or(true, |c| cmd.category == c))
        .map(|cmd| vec![cmd.usage.to_string(), cmd.description.to_string()])
        .collect();
    CommandOutput::table_with(&HELP_HEADERS, rows)
}

/// Comma-separated list of the topics `help` accepts.
pub fn help_topics() -> String {
    CommandCategory::ALL
        .iter()
        .map(CommandCategory::keyword)
        .collect::<Vec<_>>()
        .join(", ")
}
