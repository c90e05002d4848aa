//! Global error handling for repo2txt
//!
//! Only fatal conditions are represented here. Unreadable directories,
//! unreadable files and a missing `.gitignore` are recovered inside the
//! traversal and surface as diagnostics instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for repo2txt operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// Invalid configuration, detected before any traversal starts
    #[error("Configuration error: {0}")]
    Config(String),

    /// The output file could not be created or written
    #[error("Error writing to {}: {source}", path.display())]
    Output {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DumpError {
    /// Attach the destination path to a sink failure
    pub fn into_output(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io(source) => Self::Output {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}

/// Specialized Result type for repo2txt operations
pub type Result<T> = std::result::Result<T, DumpError>;

/// Creates a DumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
