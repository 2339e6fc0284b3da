//! Infrastructure adapters for Stackview.
//!
//! This crate implements the ports defined in `stackview-core::application::ports`.
//! It contains all filesystem access: enumeration, reads and watching.

pub mod watcher;
pub mod workspace;

// Re-export commonly used adapters
pub use watcher::{WatcherConfig, WorkspaceWatcher};
pub use workspace::{LocalWorkspace, MemoryWorkspace, PathFilter};
