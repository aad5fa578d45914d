//! taskr add command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::Persistence;
use crate::task::Task;

pub struct AddOptions {
    pub title: String,
    pub description: String,
    pub priority: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct AddOutput<'a> {
    task: &'a Task,
    persisted: bool,
}

pub fn run(options: AddOptions) -> Result<()> {
    let title = options.title.trim();
    if title.is_empty() {
        return Err(Error::InvalidArgument("title cannot be empty".to_string()));
    }

    let mut ctx = load_context(options.file)?;
    let priority = options
        .priority
        .unwrap_or_else(|| ctx.config.tasks.default_priority.clone());

    let outcome = ctx.store.add(title, options.description, priority);

    let mut human = HumanOutput::new("Task created");
    human.push_summary("ID", outcome.task.id.to_string());
    human.push_summary("Title", outcome.task.title.clone());
    human.push_summary("Priority", outcome.task.priority.clone());
    human.push_summary("Created", outcome.task.created_at.clone());
    if let Persistence::Failed(reason) = &outcome.persistence {
        human.push_warning(format!("task kept in memory but not saved: {reason}"));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &AddOutput {
            task: &outcome.task,
            persisted: outcome.persistence.is_saved(),
        },
        Some(&human),
    )
}
