//! Command definitions and handlers.
//!
//! Commands are string-typed at the edge: enumerated fields arrive as plain
//! strings and are validated in the core (draft validation for `add`,
//! `FromStr` parsing for the selectors), so the CLI layer stays free of
//! domain rules. Each mutating command issues its intent through the
//! matching controller and then renders the view from the post-write
//! snapshot; the `watch` commands keep the subscription open and re-render
//! on every push until Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use hangar_core::{
    CleaningStatus, FleetController, FleetView, FuelLevel, PlaneDraft, Store, TodoController,
    TodoView,
};
use log::warn;

use crate::renderer::TerminalRenderer;

/// How often a watch loop re-reads the database for writes made by other
/// processes.
const WATCH_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Fleet subcommands
#[derive(Subcommand)]
pub enum FleetCommands {
    /// List the fleet
    #[command(alias = "ls")]
    List(FleetListArgs),
    /// Add a plane to the fleet
    Add(AddPlaneArgs),
    /// Set a plane's fuel level
    Fuel(SetFuelArgs),
    /// Set a plane's cleaning status
    Clean(SetCleaningArgs),
    /// Delete a plane
    Rm(IdArgs),
    /// Watch the fleet live, re-rendering on every change
    Watch(FleetWatchArgs),
}

/// Todo subcommands
#[derive(Subcommand)]
pub enum TodoCommands {
    /// List the todos, oldest first
    #[command(alias = "ls")]
    List(TodoListArgs),
    /// Add a task
    Add(AddTodoArgs),
    /// Start a pending task
    Start(IdArgs),
    /// Delete a task
    Rm(IdArgs),
    /// Watch the todo list live, re-rendering on every change
    Watch,
}

/// List the fleet
#[derive(Args, Default)]
pub struct FleetListArgs {
    /// Sort the dirtiest planes first
    #[arg(long)]
    pub dirty_first: bool,
    /// Render one table row per plane instead of cards
    #[arg(long)]
    pub list_view: bool,
    /// Print the sorted view as JSON
    #[arg(long)]
    pub json: bool,
}

/// Watch the fleet live
#[derive(Args, Default)]
pub struct FleetWatchArgs {
    /// Sort the dirtiest planes first
    #[arg(long)]
    pub dirty_first: bool,
    /// Render one table row per plane instead of cards
    #[arg(long)]
    pub list_view: bool,
}

/// Add a plane to the fleet
#[derive(Args)]
pub struct AddPlaneArgs {
    /// Tail number of the new plane (3-10 characters)
    pub tail_number: String,
    /// Initial fuel level: Empty, Tabs, Tabs+, or Full
    #[arg(long)]
    pub fuel: Option<String>,
    /// Initial cleaning status: Dirty, C-, C, or C+
    #[arg(long)]
    pub cleaning: Option<String>,
}

/// Set a plane's fuel level
#[derive(Args)]
pub struct SetFuelArgs {
    /// Id of the plane to update
    pub id: String,
    /// New fuel level: Empty, Tabs, Tabs+, or Full
    pub level: String,
}

/// Set a plane's cleaning status
#[derive(Args)]
pub struct SetCleaningArgs {
    /// Id of the plane to update
    pub id: String,
    /// New cleaning status: Dirty, C-, C, or C+
    pub status: String,
}

/// Operate on an entity by id
#[derive(Args)]
pub struct IdArgs {
    /// Id of the entity to operate on
    pub id: String,
}

/// List the todos
#[derive(Args, Default)]
pub struct TodoListArgs {
    /// Print the sorted view as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a task
#[derive(Args)]
pub struct AddTodoArgs {
    /// Task text
    pub text: String,
}

/// Command handler wiring controllers to the terminal renderer.
pub struct Cli {
    store: Arc<Store>,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command handler.
    pub fn new(store: Arc<Store>, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Dispatch a fleet subcommand.
    pub async fn handle_fleet_command(&self, command: FleetCommands) -> Result<()> {
        match command {
            FleetCommands::List(args) => self.list_fleet(&args).await,
            FleetCommands::Add(args) => self.add_plane(args).await,
            FleetCommands::Fuel(args) => self.set_fuel_level(args).await,
            FleetCommands::Clean(args) => self.set_cleaning_status(args).await,
            FleetCommands::Rm(args) => self.remove_plane(args).await,
            FleetCommands::Watch(args) => self.watch_fleet(args).await,
        }
    }

    /// Dispatch a todo subcommand.
    pub async fn handle_todo_command(&self, command: TodoCommands) -> Result<()> {
        match command {
            TodoCommands::List(args) => self.list_todos(&args).await,
            TodoCommands::Add(args) => self.add_todo(args).await,
            TodoCommands::Start(args) => self.start_todo(args).await,
            TodoCommands::Rm(args) => self.remove_todo(args).await,
            TodoCommands::Watch => self.watch_todos().await,
        }
    }

    fn fleet_controller(&self, dirty_first: bool, list_view: bool) -> FleetController {
        let mut controller = FleetController::new(self.store.clone());
        controller.set_prioritize_dirty(dirty_first);
        controller.set_list_view(list_view);
        controller
    }

    fn render_fleet(&self, controller: &FleetController) -> Result<()> {
        let view = FleetView::new(controller.planes(), controller.list_view());
        self.renderer.render(&format!("# Fleet\n\n{view}"))
    }

    fn render_todos(&self, controller: &TodoController) -> Result<()> {
        let view = TodoView(controller.todos());
        self.renderer.render(&format!("# Todo List\n\n{view}"))
    }

    async fn list_fleet(&self, args: &FleetListArgs) -> Result<()> {
        let controller = self.fleet_controller(args.dirty_first, args.list_view);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&controller.planes())?);
            return Ok(());
        }
        self.render_fleet(&controller)
    }

    async fn add_plane(&self, args: AddPlaneArgs) -> Result<()> {
        let controller = self.fleet_controller(false, false);

        let mut draft = PlaneDraft::new(args.tail_number);
        if let Some(fuel) = args.fuel {
            draft.fuel_level = fuel;
        }
        if let Some(cleaning) = args.cleaning {
            draft.cleaning_status = cleaning;
        }

        if let Err(errors) = controller.add(&draft).await {
            for error in &errors {
                eprintln!("{error}");
            }
            bail!("Plane was not added");
        }

        self.renderer
            .render(&format!("Added plane {}.\n\n", draft.tail_number))?;
        self.render_fleet(&controller)
    }

    async fn set_fuel_level(&self, args: SetFuelArgs) -> Result<()> {
        let level = args.level.parse::<FuelLevel>().map_err(|err| anyhow!(err))?;
        let controller = self.fleet_controller(false, false);
        controller.set_fuel_level(&args.id, level).await;
        self.render_fleet(&controller)
    }

    async fn set_cleaning_status(&self, args: SetCleaningArgs) -> Result<()> {
        let status = args
            .status
            .parse::<CleaningStatus>()
            .map_err(|err| anyhow!(err))?;
        let controller = self.fleet_controller(false, false);
        controller.set_cleaning_status(&args.id, status).await;
        self.render_fleet(&controller)
    }

    async fn remove_plane(&self, args: IdArgs) -> Result<()> {
        let controller = self.fleet_controller(false, false);
        controller.remove(&args.id).await;
        self.render_fleet(&controller)
    }

    async fn watch_fleet(&self, args: FleetWatchArgs) -> Result<()> {
        let mut controller = self.fleet_controller(args.dirty_first, args.list_view);
        let mut poll = tokio::time::interval(WATCH_POLL_INTERVAL);

        self.render_fleet(&controller)?;
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                alive = controller.refresh() => {
                    if !alive {
                        break;
                    }
                    self.render_fleet(&controller)?;
                }
                _ = poll.tick() => {
                    if let Err(err) = self.store.sync().await {
                        warn!("Failed to re-read the store: {err}");
                    }
                }
            }
        }
        Ok(())
    }

    async fn list_todos(&self, args: &TodoListArgs) -> Result<()> {
        let controller = TodoController::new(self.store.clone());
        if args.json {
            println!("{}", serde_json::to_string_pretty(&controller.todos())?);
            return Ok(());
        }
        self.render_todos(&controller)
    }

    async fn add_todo(&self, args: AddTodoArgs) -> Result<()> {
        let controller = TodoController::new(self.store.clone());
        if !controller.add(&args.text).await {
            bail!("Todo text must not be blank");
        }
        self.render_todos(&controller)
    }

    async fn start_todo(&self, args: IdArgs) -> Result<()> {
        let controller = TodoController::new(self.store.clone());
        controller.start(&args.id).await;
        self.render_todos(&controller)
    }

    async fn remove_todo(&self, args: IdArgs) -> Result<()> {
        let controller = TodoController::new(self.store.clone());
        controller.remove(&args.id).await;
        self.render_todos(&controller)
    }

    async fn watch_todos(&self) -> Result<()> {
        let mut controller = TodoController::new(self.store.clone());
        let mut poll = tokio::time::interval(WATCH_POLL_INTERVAL);

        self.render_todos(&controller)?;
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                alive = controller.refresh() => {
                    if !alive {
                        break;
                    }
                    self.render_todos(&controller)?;
                }
                _ = poll.tick() => {
                    if let Err(err) = self.store.sync().await {
                        warn!("Failed to re-read the store: {err}");
                    }
                }
            }
        }
        Ok(())
    }
}
