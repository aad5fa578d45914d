//! taskr list command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

pub struct ListOptions {
    pub all: bool,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    total: usize,
    tasks: Vec<&'a Task>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.file)?;
    let tasks = ctx.store.list(options.all);

    let header = if options.all {
        "All tasks"
    } else {
        "Pending tasks"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("Count", tasks.len().to_string());
    for task in &tasks {
        let status = if task.completed { "✓" } else { " " };
        human.push_detail(format!(
            "[{}] #{} {} (priority: {}, created: {})",
            status, task.id, task.title, task.priority, task.created_at
        ));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &ListOutput {
            total: tasks.len(),
            tasks,
        },
        Some(&human),
    )
}
