//! Local workspace adapter: walkdir enumeration, tokio reads.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use stackview_core::{
    application::{ApplicationError, ports::WorkspaceFiles},
    domain::{FileRef, WorkspaceSettings},
    error::{Context, StackviewResult},
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use super::filter::{PathFilter, relative_to};

/// Production workspace over a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalWorkspace {
    root: PathBuf,
    filter: PathFilter,
    show_path: bool,
}

impl LocalWorkspace {
    /// Open `root` with the include/exclude globs and labelling from
    /// `settings`.
    pub fn new(root: impl Into<PathBuf>, settings: &WorkspaceSettings) -> StackviewResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ApplicationError::WorkspaceNotFound { path: root }.into());
        }
        Ok(Self {
            filter: PathFilter::new(&settings.include, &settings.exclude)?,
            show_path: settings.show_path,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }

    fn label(&self, path: &Path, relative: &Path) -> String {
        if self.show_path {
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        } else {
            FileRef::from_path(path).label
        }
    }

    fn walk(&self) -> StackviewResult<Vec<FileRef>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if !entry.file_type().is_dir() {
                    return true;
                }
                relative_to(&self.root, entry.path())
                    .is_none_or(|rel| !self.filter.is_excluded_dir(&rel))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable subdirectories are skipped; an unreadable root
                // fails the whole listing.
                Err(e) if e.depth() > 0 => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
                Err(e) => {
                    return Err(ApplicationError::EnumerationFailed {
                        root: self.root.clone(),
                        reason: e.to_string(),
                    }
                    .into());
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let Some(relative) = relative_to(&self.root, entry.path()) else {
                continue;
            };
            if self.filter.is_match(&relative) {
                files.push(FileRef::new(
                    entry.path().to_path_buf(),
                    self.label(entry.path(), &relative),
                ));
            }
        }

        Ok(files)
    }
}

#[async_trait]
impl WorkspaceFiles for LocalWorkspace {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn list_files(&self) -> StackviewResult<Vec<FileRef>> {
        let this = self.clone();
        let files = tokio::task::spawn_blocking(move || this.walk())
            .await
            .context("workspace walk task")??;
        debug!(files = files.len(), "Workspace enumerated");
        Ok(files)
    }

    async fn read_lines(&self, path: &Path) -> StackviewResult<Vec<String>> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        // Stray non-UTF-8 bytes become U+FFFD; the rest of the file still scans.
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }
}
