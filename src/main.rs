use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Context, Result, eyre};
use std::path::PathBuf;
use termban::{Config, NewTask, Task, TaskStatus, TaskStore, config};
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "termban")]
#[command(about = "termban - personal task tracker backed by SQLite")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the task database (default: <data dir>/termban/db/tasks.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Path to the config file (default: <config dir>/termban/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// todo, in-progress, done or a raw status code
        #[arg(short, long, default_value = "todo", value_parser = parse_status)]
        status: i64,
    },

    /// List all tasks
    List {
        /// Print tasks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a task's title, description and status
    ///
    /// The title is always replaced. Description and status keep their current
    /// values unless given.
    Update {
        id: i64,

        title: String,

        /// New description (default: keep the current one)
        #[arg(short, long)]
        description: Option<String>,

        /// New status (default: keep the current one)
        #[arg(short, long, value_parser = parse_status)]
        status: Option<i64>,
    },

    /// Delete a task
    Delete { id: i64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(config::default_config_path);
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose, &config)?)
        .with_writer(std::io::stderr)
        .init();

    // Config is read before the subscriber exists, so report it here
    debug!(path = ?config_path, ?config, "Loaded config");

    let db_path = config.resolve_db_path(cli.db.as_deref())?;
    let store = TaskStore::open(&db_path).context("Failed to open task store")?;

    match cli.command {
        Commands::Add {
            title,
            description,
            status,
        } => {
            let id = store.insert_task(&NewTask::new(title, description, status))?;
            println!("Added task {}", id);
        }
        Commands::List { json } => {
            let tasks = store.get_tasks()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print_tasks(&tasks);
            }
        }
        Commands::Update {
            id,
            title,
            description,
            status,
        } => {
            let current = store
                .get_tasks()?
                .into_iter()
                .find(|task| task.id == id)
                .ok_or_else(|| eyre!("No task with id {}", id))?;

            let task = Task {
                id,
                title,
                description: description.unwrap_or(current.description),
                status: status.unwrap_or(current.status),
            };
            if store.update_task(&task)? == 0 {
                return Err(eyre!("No task with id {}", id));
            }
            println!("Updated task {}", id);
        }
        Commands::Delete { id } => {
            if store.delete_task(id)? == 0 {
                return Err(eyre!("No task with id {}", id));
            }
            println!("Deleted task {}", id);
        }
    }

    store.close()?;
    Ok(())
}

fn log_level(verbose: u8, config: &Config) -> Result<Level> {
    match verbose {
        0 => match &config.log_level {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| eyre!("Invalid log_level {:?} in config: {}", level, e)),
            None => Ok(Level::WARN),
        },
        1 => Ok(Level::INFO),
        2 => Ok(Level::DEBUG),
        _ => Ok(Level::TRACE),
    }
}

fn parse_status(s: &str) -> std::result::Result<i64, String> {
    if let Ok(code) = s.trim().parse::<i64>() {
        return Ok(code);
    }
    s.parse::<TaskStatus>().map(TaskStatus::code)
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks");
        return;
    }

    for task in tasks {
        let text = match task.known_status() {
            Some(status) => status.to_string(),
            None => format!("status {}", task.status),
        };
        let label = format!("{:<12}", text);
        let label = match task.known_status() {
            Some(TaskStatus::Todo) => label.as_str().yellow(),
            Some(TaskStatus::InProgress) => label.as_str().cyan(),
            Some(TaskStatus::Done) => label.as_str().green(),
            None => label.as_str().dimmed(),
        };

        println!("{:>4}  {}{}", task.id, label, task.title.as_str().bold());
        if !task.description.is_empty() {
            println!("      {}", task.description.as_str().dimmed());
        }
    }
}
