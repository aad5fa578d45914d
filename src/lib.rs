//! taskr - Single-User Task Tracker Library
//!
//! This library provides the core functionality for the taskr CLI tool:
//! an in-memory task sequence mirrored to a local JSON file on every
//! mutation and restored from it at startup.
//!
//! # Core Concepts
//!
//! - **Tasks**: flat records with sequential ids, a free-form priority,
//!   and a one-way `incomplete -> completed` transition
//! - **Store**: the single owner of the task sequence; every mutation
//!   rewrites the whole backing file and reports whether the save stuck
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.taskr.toml`
//! - `error`: Error types and result aliases
//! - `output`: Shared human/JSON output formatting
//! - `store`: Task store (add, complete, list, persist, restore)
//! - `task`: Task records and the timestamp format

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod store;
pub mod task;

pub use error::{Error, Result};
