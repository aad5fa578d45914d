//! taskr done command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::load_context;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::{CompleteOutcome, Persistence};
use crate::task::Task;

pub struct DoneOptions {
    pub id: u64,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct DoneOutput<'a> {
    task: &'a Task,
    persisted: bool,
}

pub fn run(options: DoneOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;

    match ctx.store.complete(options.id) {
        CompleteOutcome::Completed { task, persistence } => {
            let mut human = HumanOutput::new("Task completed");
            human.push_summary("ID", task.id.to_string());
            human.push_summary("Title", task.title.clone());
            if let Persistence::Failed(reason) = &persistence {
                human.push_warning(format!("completion kept in memory but not saved: {reason}"));
            }

            emit_success(
                OutputOptions {
                    json: options.json,
                    quiet: options.quiet,
                },
                "done",
                &DoneOutput {
                    task: &task,
                    persisted: persistence.is_saved(),
                },
                Some(&human),
            )
        }
        CompleteOutcome::NotFound => Err(Error::TaskNotFound(options.id)),
    }
}
