use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "notes", version)]
#[command(about = "Manage your notes using CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One subcommand per storage operation. Arguments are optional so that
/// missing ones can be answered with a prompt instead of a usage error.
/// Text arguments may start with `-`, and anything past the expected
/// positionals is collected into `extra` and ignored.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new note
    New {
        #[arg(allow_hyphen_values = true)]
        title: Option<String>,
        #[arg(allow_hyphen_values = true)]
        content: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },
    /// Delete a note by ID
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },
    /// Get a note by ID
    Get {
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },
    /// List all notes
    List,
    /// Update content of a note
    Update {
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
        #[arg(allow_hyphen_values = true)]
        content: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },
    /// Search notes by keyword
    Search {
        #[arg(allow_hyphen_values = true)]
        keyword: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },
}
