//! Error types for taskr
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, unknown task id, invalid config)
//! - 4: Operation failed (I/O, serialization)

use thiserror::Error;

/// Exit codes for the taskr CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskr operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidArgument(_) | Error::TaskNotFound(_) | Error::InvalidConfig(_) => {
                exit_codes::USER_ERROR
            }

            // Operation failures
            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for taskr operations
pub type Result<T> = std::result::Result<T, Error>;
