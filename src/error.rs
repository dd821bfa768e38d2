//! Error types for longhand operations.

use thiserror::Error;

/// Errors that can occur while parsing values or compiling syntax patterns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid value at {line}:{column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    #[error("invalid syntax pattern `{pattern}`: {message}")]
    Syntax { pattern: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
