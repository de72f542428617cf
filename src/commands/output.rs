//! Command output types.
//!
//! Handlers describe what to show; the console decides how to print it.

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain message.
    Info(String),

    /// Tabular data, rendered psql-style.
    Table {
        /// Column headers.
        headers: Vec<String>,
        /// Row data (each row is a vector of cell values).
        rows: Vec<Vec<String>>,
    },

    /// End the session after printing the message.
    Exit(String),
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates a table output.
    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::Table { headers, rows }
    }

    /// Creates a table output from string-slice headers.
    pub fn table_with(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self::table(headers.iter().map(|h| h.to_string()).collect(), rows)
    }

    /// Returns true if this output ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }

    /// Renders the output as the text shown to the user.
    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) | Self::Exit(msg) => msg.clone(),
            Self::Table { headers, rows } => format_table(headers, rows),
        }
    }
}

fn width_of(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(width_of(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Formats a table in the psql style:
///
/// ```text
/// +--------+-------+
/// | Name   | Age   |
/// |--------+-------|
/// | Alice  | 30    |
/// +--------+-------+
/// ```
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| width_of(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(width_of(cell));
            }
        }
    }

    let rule = |left: char, mid: char, right: char| {
        let parts: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("{left}{}{right}", parts.join(&mid.to_string()))
    };
    let line = |cells: Vec<&str>| {
        let parts: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| format!(" {} ", pad(cells.get(i).copied().unwrap_or(""), *w)))
            .collect();
        format!("|{}|", parts.join("|"))
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule('+', '+', '+'));
    lines.push(line(headers.iter().map(String::as_str).collect()));
    lines.push(rule('|', '+', '|'));
    for row in rows {
        lines.push(line(row.iter().map(String::as_str).collect()));
    }
    lines.push(rule('+', '+', '+'));
    lines.join("\n")
}
