use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FleetCommands, TodoCommands};

/// Main command-line interface for the Hangar fleet tracking tool
///
/// Hangar keeps a small aircraft fleet and a todo list in a local document
/// store. The fleet view tracks each plane's fuel level and cleaning status;
/// the todo view tracks simple tasks through a pending to in-progress
/// lifecycle. Both views can be rendered once or watched live.
#[derive(Parser)]
#[command(version, about, name = "hangar")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/hangar/hangar.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Hangar CLI
///
/// The CLI is organized into the two views of the system:
/// - `fleet`: the aircraft list (add, update, delete, list, watch)
/// - `todo`: the todo list (add, start, delete, list, watch)
///
/// Running with no command renders the fleet view.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the fleet
    #[command(alias = "f")]
    Fleet {
        #[command(subcommand)]
        command: FleetCommands,
    },
    /// Manage the todo list
    #[command(alias = "t")]
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },
}
