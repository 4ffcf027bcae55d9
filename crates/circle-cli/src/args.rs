use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PersonCommands, PlanCommands};

/// Keep track of friends and the plans you make with them
///
/// Circle stores contacts and plans in a single JSON file. Every plan refers
/// to an existing contact by name; loading the file validates each entry and
/// reports the first problem found.
#[derive(Parser)]
#[command(version, about, name = "circle")]
pub struct Args {
    /// Path to the address book file. Defaults to
    /// $XDG_DATA_HOME/circle/addressbook.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Circle CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage contacts
    #[command(alias = "pe")]
    Person {
        #[command(subcommand)]
        command: PersonCommands,
    },
    /// Manage plans with contacts
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Load the address book and report the first invalid entry, if any
    Check,
    /// Print the JSON schema of the address book file
    Schema,
}
