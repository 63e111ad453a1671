//! Hangar CLI Application
//!
//! Command-line interface for the hangar fleet and todo tracking tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, FleetCommands, FleetListArgs};
use hangar_core::{store, StoreBuilder};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let store = store::install(
        StoreBuilder::new()
            .with_database_path(database_file)
            .build()
            .await
            .context("Failed to open the hangar store")?,
    );

    let renderer = TerminalRenderer::new(!no_color);

    info!("Hangar started");

    let cli = Cli::new(store, renderer);
    match command {
        Some(Commands::Fleet { command }) => cli.handle_fleet_command(command).await,
        Some(Commands::Todo { command }) => cli.handle_todo_command(command).await,
        None => {
            cli.handle_fleet_command(FleetCommands::List(FleetListArgs::default()))
                .await
        }
    }
}
