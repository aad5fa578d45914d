//! taskr demo command implementation.
//!
//! Canned walkthrough: seed three sample tasks, complete the first, and
//! print both listings. The plain stdout layout here is the contract, so
//! this command bypasses the shared output envelope.

use std::path::PathBuf;

use crate::cli::load_context;
use crate::error::Result;

pub struct DemoOptions {
    pub file: Option<PathBuf>,
}

pub fn run(options: DemoOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;

    ctx.store.add(
        "Create GitHub Repository",
        "Initialize a new repository for the project",
        "high",
    );
    ctx.store.add(
        "Write Documentation",
        "Create README.md and add project documentation",
        "medium",
    );
    ctx.store.add(
        "Implement Unit Tests",
        "Add unit tests for all major functions",
        "high",
    );

    println!();
    println!("Current Tasks:");
    for task in ctx.store.list(false) {
        println!("ID: {}", task.id);
        println!("Title: {}", task.title);
        println!("Priority: {}", task.priority);
        println!("Created: {}", task.created_at);
        println!("{}", "-".repeat(30));
    }

    ctx.store.complete(1);

    println!();
    println!("All Tasks (including completed):");
    for task in ctx.store.list(true) {
        let status = if task.completed { "✓" } else { " " };
        println!("[{}] {} (Priority: {})", status, task.title, task.priority);
    }

    Ok(())
}
