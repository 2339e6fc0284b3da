// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (a shared population result is handed to every waiter)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid glob '{glob}': {reason}")]
    InvalidGlob { glob: String, reason: String },

    #[error("Scan concurrency must be at least 1, got {0}")]
    InvalidConcurrency(usize),

    #[error("Watch category cannot be empty")]
    EmptyCategory,

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown tree kind '{0}'")]
    UnknownTreeKind(String),

    #[error("Unknown inflection '{0}'")]
    UnknownInflection(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidGlob { glob, .. } => vec![
                format!("Check the glob syntax of '{}'", glob),
                "Globs follow gitignore-style rules, e.g. **/*.tsx".into(),
            ],
            Self::InvalidConcurrency(_) => vec![
                "Set workspace.scan_concurrency to 1 or more".into(),
            ],
            Self::EmptyCategory => vec![
                "Remove empty entries from workspace.watch".into(),
            ],
            Self::UnknownTreeKind(kind) => vec![
                format!("'{}' is not a tree kind", kind),
                "Available trees: files, components, hooks, routes".into(),
            ],
            Self::UnknownInflection(name) => vec![
                format!("'{}' is not a known inflection", name),
                "Try: stackview inflect --help".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidGlob { .. }
            | Self::InvalidConcurrency(_)
            | Self::EmptyCategory => ErrorCategory::Validation,
            Self::UnknownTreeKind(_) | Self::UnknownInflection(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
