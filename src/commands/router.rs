//! Command resolution.
//!
//! Turns a [`ParsedCommand`] into either a command to run or the message to
//! show when nothing matched. Resolution never fails: an unknown line always
//! produces a suggestion or a pointer to `help`.

use tracing::debug;

use super::definitions::CommandDef;
use super::tokenizer::ParsedCommand;

/// Maximum number of suggestions offered for an unknown command.
pub const MAX_SUGGESTIONS: usize = 3;

/// Minimum similarity ratio for a keyword to be suggested.
pub const SUGGESTION_CUTOFF: f64 = 0.6;

/// Reply for a line that matches nothing and resembles nothing.
pub const UNKNOWN_COMMAND: &str = "Sorry, I don't know this command. Type help for help.";

/// Outcome of resolving one input line.
#[derive(Debug, Clone)]
pub enum Resolution<'a> {
    /// A command to invoke with its positional parameters.
    Command {
        def: &'a CommandDef,
        params: Vec<String>,
    },
    /// No command matched; the message to show instead.
    Unknown(String),
}

/// Resolves a tokenized line. `raw` is the line as typed and is only used to
/// build suggestions when no keyword matched.
pub fn resolve<'a>(parsed: ParsedCommand<'a>, raw: &str, table: &'a [CommandDef]) -> Resolution<'a> {
    match parsed.command {
        Some(def) => {
            debug!("Resolved '{}' with {} param(s)", def.name, parsed.params.len());
            Resolution::Command {
                def,
                params: parsed.params,
            }
        }
        None => {
            let message = unknown_command_message(raw, table);
            debug!("No command for {raw:?}");
            Resolution::Unknown(message)
        }
    }
}

/// Builds the reply for a line that matched no keyword.
pub fn unknown_command_message(raw: &str, table: &[CommandDef]) -> String {
    let word = raw.trim().to_lowercase();
    let matches = close_matches(&word, table.iter().map(|cmd| cmd.name));
    if matches.is_empty() {
        UNKNOWN_COMMAND.to_string()
    } else {
        format!("Do you have paws too? Maybe you mean: {}", matches.join(", "))
    }
}

/// Keywords whose similarity to `word` is at least [`SUGGESTION_CUTOFF`],
/// best first, at most [`MAX_SUGGESTIONS`]. Equal scores keep the order of
/// `candidates`.
pub fn close_matches<'k>(word: &str, candidates: impl IntoIterator<Item = &'k str>) -> Vec<&'k str> {
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (similarity(word, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_CUTOFF)
        .collect();

    // Stable, so ties stay in candidate order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Ratcliff/Obershelp similarity: twice the number of matched characters
/// divided by the total length of both strings, in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Characters covered by the recursive longest-common-block decomposition.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_block(a, b);
    if size == 0 {
        return 0;
    }
    size + matched_chars(&a[..i], &b[..j]) + matched_chars(&a[i + size..], &b[j + size..])
}

/// Longest common contiguous block as `(start in a, start in b, length)`.
/// On ties the block starting earliest in `a`, then in `b`, wins.
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // run[j + 1] = length of the common run ending at a[i], b[j].
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, a_ch) in a.iter().enumerate() {
        for (j, b_ch) in b.iter().enumerate() {
            curr[j + 1] = if a_ch == b_ch { prev[j] + 1 } else { 0 };
            let k = curr[j + 1];
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
