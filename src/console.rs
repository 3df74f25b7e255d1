//! Console command language.
//!
//! One command per line, parsed with clap in multicall mode so the first
//! word is the subcommand. Free-text values take the rest of the line and
//! are re-joined with single spaces. `help` comes from clap.

use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::models::{AppointmentStatus, ModelError};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Navigate to a route (/, /patients, /appointments)
    Go { path: String },
    /// Fetch the list again
    Reload,
    /// Set a list filter (empty text clears it)
    Filter {
        #[command(subcommand)]
        which: FilterCommand,
    },
    /// Apply the typed patient id as the appointment scope
    Apply,
    /// Drop the patient id scope
    ClearPatient,
    /// Fill a form field
    Set {
        field: String,
        #[arg(trailing_var_arg = true, num_args = 0.., allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Submit the form
    Submit,
    /// Edit a loaded patient
    Edit { id: i64 },
    /// Stop editing
    Cancel,
    /// Delete a row
    Delete { id: i64 },
    /// Change an appointment status
    Status { id: i64, status: AppointmentStatus },
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum FilterCommand {
    /// Patient name substring
    Name {
        #[arg(trailing_var_arg = true, num_args = 0.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Patient email substring
    Email {
        #[arg(trailing_var_arg = true, num_args = 0.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Appointment reason substring
    Reason {
        #[arg(trailing_var_arg = true, num_args = 0.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Appointment status, or `all`
    Status { status: Option<StatusChoice> },
    /// Patient id to scope appointments by (takes effect on `apply`)
    Patient {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },
}

/// Status filter argument: one status, or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChoice {
    All,
    Only(AppointmentStatus),
}

impl StatusChoice {
    pub fn status(self) -> Option<AppointmentStatus> {
        match self {
            StatusChoice::All => None,
            StatusChoice::Only(status) => Some(status),
        }
    }
}

impl FromStr for StatusChoice {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusChoice::All)
        } else {
            s.parse().map(StatusChoice::Only)
        }
    }
}

/// Words of a free-text argument as one value.
pub fn joined(words: &[String]) -> String {
    words.join(" ")
}

impl Command {
    /// Name of the command as typed, for notices.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Go { .. } => "go",
            Command::Reload => "reload",
            Command::Filter { which } => match which {
                FilterCommand::Name { .. } => "filter name",
                FilterCommand::Email { .. } => "filter email",
                FilterCommand::Reason { .. } => "filter reason",
                FilterCommand::Status { .. } => "filter status",
                FilterCommand::Patient { .. } => "filter patient",
            },
            Command::Apply => "apply",
            Command::ClearPatient => "clear-patient",
            Command::Set { .. } => "set",
            Command::Submit => "submit",
            Command::Edit { .. } => "edit",
            Command::Cancel => "cancel",
            Command::Delete { .. } => "delete",
            Command::Status { .. } => "status",
            Command::Quit => "quit",
        }
    }
}

impl FromStr for Command {
    type Err = clap::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Err(clap::Error::raw(
                ErrorKind::MissingSubcommand,
                "Empty command (try `help`)\n",
            ));
        }
        ConsoleLine::try_parse_from(words).map(|parsed| parsed.command)
    }
}
