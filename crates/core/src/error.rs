use std::path::PathBuf;
use thiserror::Error;

/// Result type for tageval operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tageval operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors (invalid label vocabulary, bad config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Malformed input line, with its 1-based line number and raw text
    #[error("Invalid format at line {line}: {content}")]
    Format { line: usize, content: String },
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a file-not-found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    /// Creates a format error for a malformed input line
    pub fn format(line: usize, content: impl Into<String>) -> Self {
        Self::Format {
            line,
            content: content.into(),
        }
    }
}
