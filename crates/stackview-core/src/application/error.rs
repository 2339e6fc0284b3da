//! Application layer errors.
//!
//! These errors represent failures in orchestration and host I/O, not
//! domain rules. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while enumerating, reading or populating trees.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The workspace could not be enumerated.
    #[error("Workspace enumeration failed at {root}: {reason}")]
    EnumerationFailed { root: PathBuf, reason: String },

    /// A file could not be read.
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// A workspace root is missing or not a directory.
    #[error("Workspace root not found: {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// Shared state lock was poisoned.
    #[error("Workspace state lock poisoned")]
    LockPoisoned,

    /// The file watcher could not be started.
    #[error("File watcher failed: {reason}")]
    WatcherFailed { reason: String },

    /// The provider was disposed and no longer serves requests.
    #[error("Provider '{provider}' has been disposed")]
    Disposed { provider: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EnumerationFailed { root, .. } => vec![
                format!("Failed to list files under: {}", root.display()),
                "Check that you have read permissions".into(),
                "Check the include/exclude globs in your config".into(),
            ],
            Self::ReadFailed { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is UTF-8 text".into(),
            ],
            Self::WorkspaceNotFound { path } => vec![
                format!("Directory does not exist: {}", path.display()),
                "Pass an existing directory with --root".into(),
            ],
            Self::WatcherFailed { .. } => vec![
                "The OS file watcher could not be started".into(),
                "On Linux, check fs.inotify.max_user_watches".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. } => ErrorCategory::NotFound,
            Self::EnumerationFailed { .. } | Self::ReadFailed { .. } => ErrorCategory::Internal,
            Self::LockPoisoned | Self::WatcherFailed { .. } => ErrorCategory::Internal,
            Self::Disposed { .. } => ErrorCategory::Internal,
        }
    }
}
