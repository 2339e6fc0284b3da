//! In-memory workspace adapter for testing and embedding.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{
        Arc, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use stackview_core::{
    application::{ApplicationError, ports::WorkspaceFiles},
    domain::FileRef,
    error::StackviewResult,
};

/// In-memory workspace. Files are listed in path order and labelled with
/// their path relative to the root.
#[derive(Debug, Clone)]
pub struct MemoryWorkspace {
    root: PathBuf,
    inner: Arc<RwLock<MemoryWorkspaceInner>>,
    counters: Arc<Counters>,
}

#[derive(Debug, Default)]
struct MemoryWorkspaceInner {
    files: BTreeMap<PathBuf, String>,
    unreadable: BTreeSet<PathBuf>,
    fail_listing: bool,
}

#[derive(Debug, Default)]
struct Counters {
    lists: AtomicUsize,
    reads: AtomicUsize,
}

impl MemoryWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            inner: Arc::new(RwLock::new(MemoryWorkspaceInner::default())),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Add or replace a file at a root-relative path.
    pub fn insert(&self, relative: impl AsRef<Path>, text: impl Into<String>) -> StackviewResult<()> {
        let path = self.root.join(relative);
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.unreadable.remove(&path);
        inner.files.insert(path, text.into());
        Ok(())
    }

    /// List the file but fail every read of it.
    pub fn insert_unreadable(&self, relative: impl AsRef<Path>) -> StackviewResult<()> {
        let path = self.root.join(relative);
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.files.insert(path.clone(), String::new());
        inner.unreadable.insert(path);
        Ok(())
    }

    pub fn remove(&self, relative: impl AsRef<Path>) -> StackviewResult<()> {
        let path = self.root.join(relative);
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.files.remove(&path);
        inner.unreadable.remove(&path);
        Ok(())
    }

    /// Make `list_files` fail until reset.
    pub fn set_fail_listing(&self, fail: bool) -> StackviewResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.fail_listing = fail;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// How many times the workspace was enumerated.
    pub fn list_calls(&self) -> usize {
        self.counters.lists.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.counters.reads.load(Ordering::SeqCst)
    }

    fn label(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait]
impl WorkspaceFiles for MemoryWorkspace {
    async fn list_files(&self) -> StackviewResult<Vec<FileRef>> {
        self.counters.lists.fetch_add(1, Ordering::SeqCst);
        let files = {
            let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;
            if inner.fail_listing {
                return Err(ApplicationError::EnumerationFailed {
                    root: self.root.clone(),
                    reason: "listing disabled".into(),
                }
                .into());
            }
            inner.files.keys().cloned().collect::<Vec<_>>()
        };
        // Let concurrent requests observe the listing as in flight.
        tokio::task::yield_now().await;
        Ok(files
            .into_iter()
            .map(|path| {
                let label = self.label(&path);
                FileRef::new(path, label)
            })
            .collect())
    }

    async fn read_lines(&self, path: &Path) -> StackviewResult<Vec<String>> {
        self.counters.reads.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;
        if inner.unreadable.contains(path) {
            return Err(ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: "marked unreadable".into(),
            }
            .into());
        }
        inner
            .files
            .get(path)
            .map(|text| text.lines().map(str::to_string).collect())
            .ok_or_else(|| {
                ApplicationError::ReadFailed {
                    path: path.to_path_buf(),
                    reason: "no such file".into(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_in_path_order_with_relative_labels() {
        let ws = MemoryWorkspace::new("/ws");
        ws.insert("src/pages/index.tsx", "").unwrap();
        ws.insert("src/components/Button.tsx", "").unwrap();

        let labels: Vec<String> = ws
            .list_files()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.label)
            .collect();

        assert_eq!(labels, vec!["src/components/Button.tsx", "src/pages/index.tsx"]);
        assert_eq!(ws.list_calls(), 1);
    }

    #[tokio::test]
    async fn unreadable_file_is_listed_but_fails_to_read() {
        let ws = MemoryWorkspace::new("/ws");
        ws.insert_unreadable("locked.ts").unwrap();

        assert_eq!(ws.list_files().await.unwrap().len(), 1);
        assert!(ws.read_lines(Path::new("/ws/locked.ts")).await.is_err());
        assert_eq!(ws.read_calls(), 1);
    }

    #[tokio::test]
    async fn listing_failure_can_be_toggled() {
        let ws = MemoryWorkspace::new("/ws");
        ws.set_fail_listing(true).unwrap();
        assert!(ws.list_files().await.is_err());

        ws.set_fail_listing(false).unwrap();
        assert!(ws.list_files().await.is_ok());
    }
}
