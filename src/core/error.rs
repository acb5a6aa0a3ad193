//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitReposError`] which covers every failure mode that
//! can reach the user. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`GitReposError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitReposError>`
//!
//! # Error Categories
//! - **Configuration**: Missing or invalid scan root, unresolvable config directory
//! - **Scanning**: The scan root cannot be enumerated
//! - **Preferences**: The favorites store cannot be read, parsed or written
//! - **Launching**: The external tool could not be started
//! - **Input**: The user pressed Ctrl+C inside a picker
//!
//! Probe failures on individual repositories are not errors at this level; they
//! are absorbed into sentinel records by the scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-repos
#[derive(Error, Debug)]
pub enum GitReposError {
    // Configuration errors
    #[error("The environment variable {variable} is not defined")]
    ConfigMissing { variable: String },

    #[error("The directory '{path}' does not exist")]
    RootNotFound { path: PathBuf },

    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    // Scan errors
    #[error("Failed to read directory '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No Git repository found")]
    NoRepositories,

    // Preference store errors
    #[error("Failed to read preferences file '{path}': {source}")]
    PreferencesReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}")]
    PreferencesParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write preferences file '{path}': {source}")]
    PreferencesWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Launcher errors
    #[error("Failed to launch '{program}' in '{path}': {source}")]
    LaunchFailed {
        program: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Interrupted")]
    Interrupted,

    // Library errors
    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitReposError
pub type Result<T> = std::result::Result<T, GitReposError>;

impl GitReposError {
    /// Create a missing configuration variable error
    pub fn config_missing(variable: impl Into<String>) -> Self {
        Self::ConfigMissing {
            variable: variable.into(),
        }
    }

    /// Create a scan root not found error
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Create a scan failed error
    pub fn scan_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a preferences read failed error
    pub fn preferences_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PreferencesReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a preferences parse failed error
    pub fn preferences_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::PreferencesParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a preferences write failed error
    pub fn preferences_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PreferencesWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a launch failed error
    pub fn launch_failed(
        program: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::LaunchFailed {
            program: program.into(),
            path: path.into(),
            source,
        }
    }
}
