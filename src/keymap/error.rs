use std::path::PathBuf;
use thiserror::Error;

use crate::core::validator::ValidationError;
use crate::keymap::parser::ParseError;

/// Errors that can occur while loading a keymap.
#[derive(Debug, Error)]
pub enum KeymapError {
    /// Keymap file does not exist.
    #[error("Keymap file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be tilde-expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Syntax error in the keymap file.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A bind line declares a malformed or duplicate shortcut.
    #[error("Invalid binding on line {line}: {source}")]
    InvalidBinding {
        line: usize,
        #[source]
        source: ValidationError,
    },
    /// A bind line names an action the application does not provide.
    #[error("Unknown action '{action}' on line {line}")]
    UnknownAction { action: String, line: usize },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
