//! Error types for the cssbuild engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cssbuild operations
#[derive(Debug, Error)]
pub enum CssBuildError {
    /// Configuration file could not be parsed or carries fields of the wrong shape
    #[error("Failed to parse configuration file '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `src` glob pattern that the pattern engine rejects
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A compiler backend failed on a source file
    #[error("Failed to compile '{path}': {message}")]
    Compile { path: PathBuf, message: String },

    /// A path argument that is neither an existing file nor a directory
    #[error("Can't find file or directory '{path}'")]
    InputNotFound { path: PathBuf },
}

impl CssBuildError {
    /// Create a configuration error with the config file's path
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a compile error for a source file
    pub fn compile(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Compile {
            path: path.into(),
            message: message.into(),
        }
    }
}
