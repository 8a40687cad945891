//! `taskdeck` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the task store.
//! - Translate one subcommand into one controller event and print the
//!   resulting view.

mod terminal;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::{
    init_logging, AppConfig, AppState, ConfigOverrides, Controller, EventOutcome, HtmlSurface,
    PersistentStore, SqliteBackend, SystemClock, Task, TaskId, UiEvent,
};
use terminal::TerminalSurface;

#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "Keep a short local task list")]
struct Cli {
    /// Directory holding the task database [env: TASKDECK_DATA_DIR]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error [env: TASKDECK_LOG_LEVEL]
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files [env: TASKDECK_LOG_DIR]
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show tasks for the saved filter
    List {
        /// Case-insensitive title search
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Add a task
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip a task, or force its state
    Toggle {
        /// Task id or unique id prefix
        id: String,
        #[arg(long, conflicts_with = "undone")]
        done: bool,
        #[arg(long)]
        undone: bool,
    },
    /// Delete a task
    #[command(alias = "delete")]
    Rm {
        /// Task id or unique id prefix
        id: String,
    },
    /// Save the filter: all, active or completed
    Filter { mode: String },
    /// Delete every completed task
    ClearCompleted {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete every task
    ClearAll {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Print the current view as HTML
    Html {
        #[arg(long, short)]
        search: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli)?;
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("{} logging disabled: {err}", "warning:".yellow().bold());
    }

    let backend = SqliteBackend::open(config.db_path())?;
    let state = AppState::load(PersistentStore::new(backend), SystemClock);
    let command = cli.command.unwrap_or(Command::List { search: None });
    info!("event=cli_command module=cli status=start command={}", command_name(&command));

    if let Command::Html { search } = command {
        let mut controller = Controller::new(state, HtmlSurface::new());
        if let Some(search) = search {
            controller.dispatch(UiEvent::SearchInput(search));
        }
        println!("{}", controller.surface().to_html());
        return Ok(());
    }

    let assume_yes = matches!(
        command,
        Command::ClearCompleted { yes: true } | Command::ClearAll { yes: true }
    );
    let mut controller = Controller::new(state, TerminalSurface::new(assume_yes));
    if let Some(event) = to_event(command, controller.state().repo().items()) {
        let outcome = controller.dispatch(event);
        report(&outcome);
    }
    controller.surface().print(&mut io::stdout().lock())?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> io::Result<AppConfig> {
    let overrides = ConfigOverrides {
        data_dir: cli.data_dir.clone(),
        log_level: cli.log_level.clone(),
        log_dir: cli.log_dir.clone(),
    };
    let cwd = std::env::current_dir()?;
    let fallback_root = dirs::data_dir().unwrap_or_else(|| cwd.clone());
    let mut config = AppConfig::resolve(overrides, |name| std::env::var(name).ok(), &fallback_root);
    if config.log_dir.is_relative() {
        config.log_dir = cwd.join(&config.log_dir);
    }
    Ok(config)
}

fn to_event(command: Command, items: &[Task]) -> Option<UiEvent> {
    match command {
        Command::List { search } => search.map(UiEvent::SearchInput),
        Command::Add { title } => Some(UiEvent::SubmitNewTask(title.join(" "))),
        Command::Toggle { id, done, undone } => {
            let id = resolve_id(items, &id);
            Some(match (done, undone) {
                (true, _) => UiEvent::CheckboxChanged { id, checked: true },
                (_, true) => UiEvent::CheckboxChanged { id, checked: false },
                _ => UiEvent::toggle(id),
            })
        }
        Command::Rm { id } => Some(UiEvent::delete(resolve_id(items, &id))),
        Command::Filter { mode } => Some(UiEvent::FilterChipClicked(mode)),
        Command::ClearCompleted { .. } => Some(UiEvent::ClearCompleted),
        Command::ClearAll { .. } => Some(UiEvent::ClearAll),
        Command::Html { .. } => None,
    }
}

/// Expands a unique id prefix to the full id; anything else passes through
/// unchanged and later resolves to a no-op.
fn resolve_id(items: &[Task], input: &str) -> TaskId {
    let input = input.trim();
    if let Some(task) = items.iter().find(|task| task.id.as_str() == input) {
        return task.id.clone();
    }
    let mut matches = items
        .iter()
        .filter(|task| !input.is_empty() && task.id.as_str().starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(task), None) => task.id.clone(),
        _ => TaskId::from(input),
    }
}

fn report(outcome: &EventOutcome) {
    match outcome {
        EventOutcome::Added(id) => eprintln!("{} {id}", "added".green()),
        EventOutcome::Applied | EventOutcome::Deferred => {}
        EventOutcome::Declined => eprintln!("{}", "cancelled".yellow()),
        EventOutcome::Ignored => eprintln!("{}", "nothing changed".dimmed()),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List { .. } => "list",
        Command::Add { .. } => "add",
        Command::Toggle { .. } => "toggle",
        Command::Rm { .. } => "rm",
        Command::Filter { .. } => "filter",
        Command::ClearCompleted { .. } => "clear_completed",
        Command::ClearAll { .. } => "clear_all",
        Command::Html { .. } => "html",
    }
}
