//! Workspace events that may invalidate provider caches.

use std::path::{Path, PathBuf};

/// A file-system event reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    /// A file was created.
    Created(PathBuf),
    /// A document was saved (file contents written).
    Saved(PathBuf),
    /// A file was deleted.
    Deleted(PathBuf),
    /// A file was renamed.
    Renamed { from: PathBuf, to: PathBuf },
}

impl WorkspaceEvent {
    /// Whether this event should drop cached trees.
    ///
    /// Only creation and saves do; deletes and renames are left to an explicit
    /// refresh.
    pub fn invalidates(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Saved(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p) | Self::Saved(p) | Self::Deleted(p) => p,
            Self::Renamed { to, .. } => to,
        }
    }
}

/// Notification sent to observers after a provider drops its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChanged {
    /// Cache generation after the invalidation.
    pub generation: u64,
}
