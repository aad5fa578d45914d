//! Command-line interface for taskr
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::store::TaskStore;

mod add;
mod demo;
mod done;
mod list;

/// taskr - single-user task tracker
///
/// Tracks tasks in a local JSON file: add tasks, mark them done, list
/// what is pending.
#[derive(Parser, Debug)]
#[command(name = "taskr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file (overrides the configured storage path)
    #[arg(long, global = true, env = "TASKR_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Longer description of the task
        #[arg(short, long, default_value = "")]
        description: String,

        /// Priority: low, medium, or high (other values are accepted as-is)
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Mark a task as done
    Done {
        /// Task id
        id: u64,
    },

    /// List tasks (pending only by default)
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
    },

    /// Run the built-in demonstration flow
    Demo,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add {
                title,
                description,
                priority,
            } => add::run(add::AddOptions {
                title,
                description,
                priority,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Done { id } => done::run(done::DoneOptions {
                id,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { all } => list::run(list::ListOptions {
                all,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Demo => demo::run(demo::DemoOptions { file: self.file }),
        }
    }
}

/// Loaded configuration plus the store it points at.
pub(crate) struct Context {
    pub config: Config,
    pub store: TaskStore,
}

/// Resolve the storage path (flag/env over config over default) and open
/// the store against it.
pub(crate) fn load_context(file: Option<PathBuf>) -> Result<Context> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd);
    let path = file.unwrap_or_else(|| PathBuf::from(&config.storage.path));
    let store = TaskStore::open(path);
    Ok(Context { config, store })
}
