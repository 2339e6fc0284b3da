//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the host.
//! The `stackview-adapters` crate provides implementations.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::FileRef;
use crate::error::StackviewResult;

/// Port for workspace file access.
///
/// Implemented by:
/// - `stackview_adapters::workspace::LocalWorkspace` (production)
/// - `stackview_adapters::workspace::MemoryWorkspace` (testing)
///
/// ## Design Notes
///
/// - `list_files` returns files in a stable order; trees keep that order
/// - Include/exclude filtering is the adapter's job
/// - `read_lines` failures are per-file and never abort a scan
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceFiles: Send + Sync {
    /// Enumerate workspace files matching the configured globs.
    async fn list_files(&self) -> StackviewResult<Vec<FileRef>>;

    /// Read a text file as lines (without line terminators).
    async fn read_lines(&self, path: &Path) -> StackviewResult<Vec<String>>;
}
