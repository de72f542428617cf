//! Command interpretation and dispatch for Pawbook.
//!
//! A line flows through [`tokenizer::parse_line`], [`router::resolve`] and
//! [`invoke::invoke`]; handlers live in [`handlers`] and are bound to their
//! keywords in [`definitions::COMMANDS`].

pub mod definitions;
pub mod handlers;
pub mod help;
pub mod invoke;
pub mod output;
pub mod router;
pub mod tokenizer;

pub use definitions::{Arity, CommandCategory, CommandDef, COMMANDS};
pub use handlers::{Handler, Params};
pub use invoke::invoke;
pub use output::CommandOutput;
pub use router::{resolve, Resolution};
pub use tokenizer::{parse_line, ParsedCommand};
