//! Line grammar for `roster shell`.
//!
//! Each stdin line is split shell-style (so `"Ana María"` stays one argument)
//! and then parsed by clap as if it were a command line of its own.

use clap::{Parser, Subcommand};
use roster::ordering::SortKey;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    no_binary_name = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add a student
    #[command(alias = "add")]
    Create {
        id: String,
        name: String,
        /// Whole number greater than zero
        #[arg(allow_hyphen_values = true)]
        age: String,
    },

    /// Change a student's name and age
    Edit {
        id: String,
        name: String,
        #[arg(allow_hyphen_values = true)]
        age: String,
    },

    /// Edit a student and show the record before and after
    SnapshotEdit {
        id: String,
        name: String,
        #[arg(allow_hyphen_values = true)]
        age: String,
    },

    /// Remove a student
    #[command(alias = "rm")]
    Delete { id: String },

    /// Show one student by id
    Find { id: String },

    /// List students in the active ordering
    #[command(alias = "ls")]
    List,

    /// Switch the ordering: id, name or age
    Order { key: SortKey },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Error, Debug)]
pub enum LineError {
    #[error("could not split line: {0}")]
    Split(#[from] shell_words::ParseError),

    /// Also carries `help` output, which clap reports as an error kind.
    #[error("{0}")]
    Parse(#[from] clap::Error),
}

impl LineError {
    /// `help` requests are not failures.
    pub fn is_help(&self) -> bool {
        matches!(
            self,
            LineError::Parse(e) if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    }
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, LineError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(trimmed)?;
    let parsed = ShellLine::try_parse_from(words)?;
    Ok(Some(parsed.command))
}
