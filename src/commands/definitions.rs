//! The command table.
//!
//! [`COMMANDS`] is the single source of truth for what the assistant
//! understands: each entry binds a literal lowercase keyword to its handler
//! together with help text, call arity and the prompts used to solicit
//! missing parameters. The table is static and never changes at runtime.
//!
//! Order matters: the tokenizer tests keywords in table order and the first
//! keyword that prefixes the input wins.

use std::fmt;

use super::handlers::{calendar, contacts, files, notes, system, weather, Handler, SyncHandler};
use crate::error::{HandlerError, HandlerResult};

/// How many positional parameters a handler accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Any number; the handler checks what it needs itself.
    Variadic,
    /// Exactly this many.
    Exact(usize),
}

impl Arity {
    /// Checks a call against this arity.
    pub fn check(&self, command: &str, given: usize) -> HandlerResult<()> {
        match *self {
            Self::Variadic => Ok(()),
            Self::Exact(expected) if expected == given => Ok(()),
            Self::Exact(expected) => {
                let noun = if expected == 1 { "argument" } else { "arguments" };
                let verb = if given == 1 { "was" } else { "were" };
                Err(HandlerError::argument_mismatch(format!(
                    "{command}() takes {expected} positional {noun} but {given} {verb} given"
                )))
            }
        }
    }
}

/// Category for grouping commands in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    /// General commands.
    General,
    /// Contact book commands.
    Contacts,
    /// Note book commands.
    Notes,
    /// Lookups and utilities.
    Utilities,
}

impl CommandCategory {
    pub const ALL: [CommandCategory; 4] =
        [Self::General, Self::Contacts, Self::Notes, Self::Utilities];

    /// Word accepted by `help <topic>`.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Contacts => "contacts",
            Self::Notes => "notes",
            Self::Utilities => "utilities",
        }
    }

    /// Looks a category up by its keyword, ignoring case.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.keyword().eq_ignore_ascii_case(word))
    }
}

/// Definition of a command.
pub struct CommandDef {
    /// Literal lowercase keyword.
    pub name: &'static str,
    /// Short description shown in help.
    pub description: &'static str,
    /// Usage line shown in help.
    pub usage: &'static str,
    /// Accepted number of positional parameters.
    pub arity: Arity,
    /// Labels for parameters the console asks for when not typed inline,
    /// in positional order.
    pub prompts: &'static [&'static str],
    /// Category for grouping in help.
    pub category: CommandCategory,
    /// The implementation.
    pub handler: &'static dyn Handler,
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("prompts", &self.prompts)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Finds a command by its exact keyword.
pub fn find_command<'a>(table: &'a [CommandDef], name: &str) -> Option<&'a CommandDef> {
    table.iter().find(|cmd| cmd.name == name)
}

/// All command definitions, in matching order.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "hello",
        description: "greeting",
        usage: "hello",
        arity: Arity::Exact(0),
        prompts: &[],
        category: CommandCategory::General,
        handler: &SyncHandler(system::hello),
    },
    CommandDef {
        name: "help",
        description: "this help",
        usage: "help",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::General,
        handler: &SyncHandler(system::help),
    },
    CommandDef {
        name: "add_contact",
        description: "add new contact or new number for contact",
        usage: "add_contact",
        arity: Arity::Variadic,
        prompts: &[
            "Input contact name: ",
            "Input phone number: ",
            "Input birthday (DD-MM-YYYY): ",
            "Input email: ",
            "Input address: ",
        ],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::add_contact),
    },
    CommandDef {
        name: "change_phone",
        description: "change specified number for contact",
        usage: "change_phone <name> <old> <new>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::change_phone),
    },
    CommandDef {
        name: "change_address",
        description: "change specified address for contact",
        usage: "change_address <name> <old> <new>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::change_address),
    },
    CommandDef {
        name: "change_birthday",
        description: "change specified birthday for contact",
        usage: "change_birthday <name> <old> <new>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::change_birthday),
    },
    CommandDef {
        name: "change_email",
        description: "change specified email for contact",
        usage: "change_email <name> <old> <new>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::change_email),
    },
    CommandDef {
        name: "phone",
        description: "show phone numbers for specified contact",
        usage: "phone <name>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::phone),
    },
    CommandDef {
        name: "show_all",
        description: "show all contacts",
        usage: "show_all",
        arity: Arity::Exact(0),
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::show_all),
    },
    CommandDef {
        name: "exit",
        description: "shutdown application",
        usage: "exit",
        arity: Arity::Exact(0),
        prompts: &[],
        category: CommandCategory::General,
        handler: &SyncHandler(system::exit),
    },
    CommandDef {
        name: "delete_phone",
        description: "delete specified number from contact",
        usage: "delete_phone <name> <phone>",
        arity: Arity::Exact(2),
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::delete_phone),
    },
    CommandDef {
        name: "contact_delete",
        description: "delete specified contact",
        usage: "contact_delete <name>",
        arity: Arity::Exact(1),
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::contact_delete),
    },
    CommandDef {
        name: "search",
        description: "search contacts by letters in name or digits in number",
        usage: "search <text>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(contacts::search),
    },
    CommandDef {
        name: "sort",
        description: "sorting files in directory X",
        usage: "sort <dir>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Utilities,
        handler: &SyncHandler(files::sort),
    },
    CommandDef {
        name: "note_add",
        description: "add new note to the notebook",
        usage: "note_add <word> [tags...]",
        arity: Arity::Variadic,
        prompts: &["Input text for the note: ", "Input tags for the note: "],
        category: CommandCategory::Notes,
        handler: &SyncHandler(notes::note_add),
    },
    CommandDef {
        name: "note_delete",
        description: "delete the note from the notebook",
        usage: "note_delete",
        arity: Arity::Variadic,
        prompts: &["Input at least 20 first chars of the note for deleting: "],
        category: CommandCategory::Notes,
        handler: &SyncHandler(notes::note_delete),
    },
    CommandDef {
        name: "note_edit",
        description: "edit the note in the notebook",
        usage: "note_edit",
        arity: Arity::Variadic,
        prompts: &[
            "Input at least 20 first chars of the note for editing: ",
            "Input the new text of note: ",
        ],
        category: CommandCategory::Notes,
        handler: &SyncHandler(notes::note_edit),
    },
    CommandDef {
        name: "note_show_all",
        description: "show all notes",
        usage: "note_show_all",
        arity: Arity::Exact(0),
        prompts: &[],
        category: CommandCategory::Notes,
        handler: &SyncHandler(notes::note_show_all),
    },
    CommandDef {
        name: "tag_search",
        description: "search all notes with the tag",
        usage: "tag_search <tag>",
        arity: Arity::Exact(1),
        prompts: &[],
        category: CommandCategory::Notes,
        handler: &SyncHandler(notes::tag_search),
    },
    CommandDef {
        name: "tag_sort",
        description: "sort all notes by tags",
        usage: "tag_sort",
        arity: Arity::Exact(0),
        prompts: &[],
        category: CommandCategory::Notes,
        handler: &SyncHandler(notes::tag_sort),
    },
    CommandDef {
        name: "birthday",
        description: "list of contacts with birthday in X days",
        usage: "birthday <X>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Contacts,
        handler: &SyncHandler(calendar::birthday),
    },
    CommandDef {
        name: "word_search",
        description: "search all notes with the word",
        usage: "word_search <word>",
        arity: Arity::Exact(1),
        prompts: &[],
        category: CommandCategory::Notes,
        handler: &SyncHandler(notes::word_search),
    },
    CommandDef {
        name: "holiday",
        description: "list of holidays in Ukraine today or in X days",
        usage: "holiday [X]",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Utilities,
        handler: &SyncHandler(calendar::holiday),
    },
    CommandDef {
        name: "weather",
        description: "show weather in city X",
        usage: "weather <city>",
        arity: Arity::Variadic,
        prompts: &[],
        category: CommandCategory::Utilities,
        handler: &weather::WeatherHandler,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for cmd in COMMANDS {
            assert!(seen.insert(cmd.name), "duplicate keyword {}", cmd.name);
            assert_eq!(cmd.name, cmd.name.to_lowercase());
            assert!(!cmd.name.contains(char::is_whitespace));
        }
        assert_eq!(COMMANDS.len(), 24);
    }

    #[test]
    fn test_no_keyword_prefixes_another() {
        for a in COMMANDS {
            for b in COMMANDS {
                if a.name != b.name {
                    assert!(
                        !b.name.starts_with(a.name),
                        "'{}' is a prefix of '{}'",
                        a.name,
                        b.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_find_command() {
        assert_eq!(find_command(COMMANDS, "phone").unwrap().name, "phone");
        assert!(find_command(COMMANDS, "Phone").is_none());
        assert!(find_command(COMMANDS, "quit").is_none());
    }

    #[test]
    fn test_arity_check() {
        assert!(Arity::Variadic.check("help", 3).is_ok());
        assert!(Arity::Exact(2).check("delete_phone", 2).is_ok());

        let err = Arity::Exact(1).check("contact_delete", 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Not enough arguments. Error: contact_delete() takes 1 positional argument but 0 were given"
        );

        let err = Arity::Exact(0).check("hello", 1).unwrap_err();
        assert!(err
            .to_string()
            .ends_with("hello() takes 0 positional arguments but 1 was given"));
    }

    #[test]
    fn test_prompting_commands_are_variadic() {
        for cmd in COMMANDS.iter().filter(|c| !c.prompts.is_empty()) {
            assert_eq!(cmd.arity, Arity::Variadic, "{}", cmd.name);
        }
    }
}
