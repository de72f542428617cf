//! Directory sorting handler.

use std::path::PathBuf;

use super::Params;
use crate::commands::output::{format_table, CommandOutput};
use crate::error::HandlerResult;
use crate::session::Session;
use crate::sorter::{sort_directory, SortReport};

fn join_or_dash<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined: Vec<&str> = items.into_iter().map(String::as_str).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

fn render_report(dir: &str, report: &SortReport) -> String {
    if report.total() == 0 {
        return format!("Nothing to sort in {dir}");
    }
    let headers = vec!["Category".to_string(), "Files".to_string()];
    let rows: Vec<Vec<String>> = report
        .moved
        .iter()
        .map(|(category, count)| vec![category.clone(), count.to_string()])
        .collect();
    format!(
        "{}\nKnown extensions: {}\nUnknown extensions: {}",
        format_table(&headers, &rows),
        join_or_dash(&report.known_extensions),
        join_or_dash(&report.unknown_extensions),
    )
}

/// Handle sort: directory path (may contain spaces).
pub fn sort(_session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let dir = params.joined_from(0, "dir")?;
    let report = sort_directory(&PathBuf::from(&dir))?;
    Ok(CommandOutput::info(render_report(&dir, &report)))
}
