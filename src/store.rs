//! Task storage for taskr.
//!
//! `TaskStore` owns the full in-memory task sequence and mirrors it to a
//! JSON file on every mutation. The file holds a pretty-printed JSON array
//! and is rewritten completely on each change; list queries read memory
//! only.
//!
//! The store never installs any logging state of its own. It emits
//! `tracing` events (one per add, per completion attempt, per save/load
//! outcome) and leaves subscriber setup to the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::task::{self, Task};

/// Outcome of the write-back that follows a mutation.
///
/// The mutation always applies in memory first. A failed save means the
/// file on disk is stale until the next successful write; the in-memory
/// sequence remains the source of truth for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Saved,
    Failed(String),
}

impl Persistence {
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved)
    }
}

/// Result of [`TaskStore::add`].
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub task: Task,
    pub persistence: Persistence,
}

/// Result of [`TaskStore::complete`].
#[derive(Debug, Clone)]
pub enum CompleteOutcome {
    /// The task exists; it is now completed and a save was attempted.
    /// Completing an already-completed task lands here again.
    Completed {
        task: Task,
        persistence: Persistence,
    },
    /// No task has the given id. Nothing was mutated or written.
    NotFound,
}

/// In-memory task sequence backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open a store backed by the given file, restoring any existing
    /// state. A missing file starts an empty store; an unreadable or
    /// corrupt file is logged and likewise starts empty. Never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = restore(&path);
        Self { path, tasks }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of tasks, completed or not.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task and write the sequence back out.
    ///
    /// Ids are assigned as `len + 1` in creation order and never reused;
    /// with deletion unsupported this yields a gapless ascending sequence.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
    ) -> AddOutcome {
        let task = Task {
            id: self.tasks.len() as u64 + 1,
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            created_at: task::timestamp_now(),
            completed: false,
        };
        self.tasks.push(task.clone());
        info!(id = task.id, title = %task.title, "task created");

        let persistence = self.persist();
        AddOutcome { task, persistence }
    }

    /// Mark the task with the given id as completed.
    ///
    /// Ids are unique by construction, so first-match is at most one
    /// match. Completing an already-completed task reports `Completed`
    /// again and rewrites the file; an unknown id leaves both memory and
    /// disk untouched.
    pub fn complete(&mut self, task_id: u64) -> CompleteOutcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            warn!(id = task_id, "task not found");
            return CompleteOutcome::NotFound;
        };

        task.completed = true;
        let task = task.clone();
        info!(id = task.id, title = %task.title, "task completed");

        let persistence = self.persist();
        CompleteOutcome::Completed { task, persistence }
    }

    /// Tasks in insertion order (ascending id). With `include_completed`
    /// set, all of them; otherwise only those still pending. Reads memory
    /// only.
    pub fn list(&self, include_completed: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| include_completed || !task.completed)
            .collect()
    }

    /// Serialize the entire sequence over the backing file.
    ///
    /// Plain whole-file rewrite, not an atomic rename: a failure can
    /// leave the file stale or truncated while memory stays
    /// authoritative.
    fn persist(&self) -> Persistence {
        match self.write_file() {
            Ok(()) => {
                info!(path = %self.path.display(), count = self.tasks.len(), "tasks saved");
                Persistence::Saved
            }
            Err(err) => {
                error!(path = %self.path.display(), %err, "failed to save tasks");
                Persistence::Failed(err.to_string())
            }
        }
    }

    fn write_file(&self) -> crate::error::Result<()> {
        // Parent may be "" for a bare relative file name.
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn restore(path: &Path) -> Vec<Task> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no existing task file");
            return Vec::new();
        }
        Err(err) => {
            error!(path = %path.display(), %err, "failed to read task file");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Task>>(&content) {
        Ok(tasks) => {
            info!(path = %path.display(), count = tasks.len(), "tasks loaded");
            tasks
        }
        Err(err) => {
            error!(path = %path.display(), %err, "failed to parse task file");
            Vec::new()
        }
    }
}
