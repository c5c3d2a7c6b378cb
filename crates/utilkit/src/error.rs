//! Error types for the helper modules

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the [`color`](crate::color) and [`yaml`](crate::yaml) converters
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Not a `#rrggbb` / `rrggbb` color
    #[error("Invalid hex color: '{0}'. Expected six hex digits with an optional leading '#'")]
    InvalidHexColor(String),

    /// YAML input could not be parsed
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A composite mapping key could not be rendered as a string
    #[error("Cannot convert mapping key to string: {0}")]
    Key(#[from] serde_json::Error),
}

/// Errors from [`rename`](crate::fs::rename) and its fallbacks
#[derive(Debug, Error)]
pub enum FsError {
    /// Source path does not exist or cannot be inspected
    #[error("Failed to stat source {path}: {source}")]
    Stat {
        /// Path that was inspected
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Source file could not be opened for reading
    #[error("Failed to open source file {path}: {source}")]
    OpenSource {
        /// Source file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Destination file could not be created
    #[error("Failed to open dest file {path}: {source}")]
    CreateDest {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Copying bytes from source to destination failed
    #[error("Failed to write to output file {path}: {source}")]
    Copy {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The copy succeeded but the original could not be deleted
    #[error("Failed removing original file {path}: {source}")]
    RemoveSource {
        /// Source file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A destination directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Walking the source tree failed
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Errors from the [`process`](crate::process) helpers
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The current executable path could not be determined
    #[error("Failed to locate current executable: {0}")]
    CurrentExe(#[source] io::Error),

    /// Symlinks in the executable path could not be resolved
    #[error("Failed to resolve executable path {path}: {source}")]
    Canonicalize {
        /// Path that was being resolved
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The executable path has no parent directory
    #[error("Executable path has no parent directory: {0}")]
    NoParent(PathBuf),

    /// A signal handler could not be installed
    #[error("Failed to install signal handler: {0}")]
    Signal(#[source] io::Error),
}
