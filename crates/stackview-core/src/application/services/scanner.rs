//! Line scanner - per-file population of match leaves.
//!
//! Reads each file through the [`WorkspaceFiles`] port, tests every line
//! against a [`ScanPattern`], and emits one leaf per matching line.
//!
//! A file that cannot be read is logged and contributes no children; the
//! failure never reaches the caller.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use crate::{
    application::ports::WorkspaceFiles,
    domain::{FileRef, ScanPattern, TreeNode},
};

/// Scans workspace files for one pattern with bounded read concurrency.
#[derive(Clone)]
pub struct LineScanner {
    workspace: Arc<dyn WorkspaceFiles>,
    pattern: ScanPattern,
    concurrency: usize,
}

impl LineScanner {
    /// Create a scanner. A `concurrency` of 0 is treated as 1.
    pub fn new(workspace: Arc<dyn WorkspaceFiles>, pattern: ScanPattern, concurrency: usize) -> Self {
        Self {
            workspace,
            pattern,
            concurrency: concurrency.max(1),
        }
    }

    pub fn pattern(&self) -> ScanPattern {
        self.pattern
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Match leaves for one file, in line order.
    #[instrument(skip_all, fields(pattern = %self.pattern, file = %file.label))]
    pub async fn scan_file(&self, file: &FileRef) -> Vec<TreeNode> {
        match self.workspace.read_lines(&file.path).await {
            Ok(lines) => {
                let matches = scan_lines(self.pattern, file, &lines);
                debug!(lines = lines.len(), matches = matches.len(), "File scanned");
                matches
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %file.path.display(),
                    "Failed to read file, skipping"
                );
                Vec::new()
            }
        }
    }

    /// Scan every file, at most `concurrency` reads in flight.
    ///
    /// Results come back in input order whatever order the reads finish in.
    pub async fn scan_all(&self, files: Vec<FileRef>) -> Vec<(FileRef, Vec<TreeNode>)> {
        let scanner = self.clone();
        stream::iter(files)
            .map(move |file| {
                let scanner = scanner.clone();
                async move {
                    let children = scanner.scan_file(&file).await;
                    (file, children)
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

impl std::fmt::Debug for LineScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineScanner")
            .field("pattern", &self.pattern)
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}

/// Match leaves for already-read lines. Line indices are 0-based.
pub fn scan_lines(pattern: ScanPattern, file: &FileRef, lines: &[String]) -> Vec<TreeNode> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            pattern
                .match_line(line)
                .map(|label| TreeNode::line_match(label, file, index))
        })
        .collect()
}
