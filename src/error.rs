//! Error types for the shell
//!
//! Command-level errors are rendered to the user and the loop keeps going;
//! only stream errors leave the loop.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the shell
#[derive(Error, Debug)]
pub enum ShellError {
    /// A command was invoked without an argument it needs
    #[error("Usage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    /// The contents of a file could not be read as text
    #[error("Unable to read contents: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the input stream or writing the output stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ShellError {
    /// Create a new missing argument error
    pub fn missing_argument(command: &'static str, usage: &'static str) -> Self {
        Self::MissingArgument { command, usage }
    }

    /// Create a new file read error
    pub fn file_read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the loop can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingArgument { .. } | Self::FileRead { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_argument_renders_usage() {
        let err = ShellError::missing_argument("fi", "fi <path>");
        assert_eq!(err.to_string(), "Usage: fi <path>");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_file_read_renders_reason() {
        let err = ShellError::file_read(
            "notes.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "Unable to read contents: permission denied");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_error_is_not_recoverable() {
        let err: ShellError = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe").into();
        assert!(!err.is_recoverable());
    }
}
