//! Error types for greeter
//!
//! Uses `thiserror` for library errors. Formatting a greeting cannot fail;
//! these cover configuration loading and writing to the output sink.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for greeter operations
pub type GreeterResult<T> = Result<T, GreeterError>;

/// Main error type for greeter operations
#[derive(Error, Debug)]
pub enum GreeterError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file passed explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Environment variable holds a value outside its accepted set
    #[error("invalid value '{value}' for {var} (expected {expected})")]
    InvalidEnvValue {
        var: String,
        value: String,
        expected: String,
    },
}
