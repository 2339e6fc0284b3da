//! In-crate test double for the `WorkspaceFiles` port.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::{ApplicationError, ports::WorkspaceFiles};
use crate::domain::FileRef;
use crate::error::StackviewResult;

pub fn file(label: &str) -> FileRef {
    FileRef::new(PathBuf::from("/ws").join(label), label)
}

/// Files held in memory, listed in insertion order.
#[derive(Default)]
pub struct ScriptedWorkspace {
    order: Mutex<Vec<String>>,
    contents: Mutex<BTreeMap<String, Option<String>>>,
    read_delay: Option<Duration>,
    fail_listing: AtomicBool,
    list_calls: AtomicUsize,
    read_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, label: &str, text: &str) -> Self {
        self.put(label, Some(text.to_string()));
        self
    }

    pub fn with_unreadable(self, label: &str) -> Self {
        self.put(label, None);
        self
    }

    pub fn with_read_delay_ms(mut self, ms: u64) -> Self {
        self.read_delay = Some(Duration::from_millis(ms));
        self
    }

    pub fn put(&self, label: &str, text: Option<String>) {
        let mut order = self.order.lock().unwrap();
        if !order.iter().any(|l| l == label) {
            order.push(label.to_string());
        }
        self.contents.lock().unwrap().insert(label.to_string(), text);
    }

    pub fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    pub fn files(&self) -> Vec<FileRef> {
        self.order.lock().unwrap().iter().map(|l| file(l)).collect()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn max_reads_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkspaceFiles for ScriptedWorkspace {
    async fn list_files(&self) -> StackviewResult<Vec<FileRef>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        // Suspend once so overlapping requests observe the pending state.
        tokio::task::yield_now().await;
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(ApplicationError::EnumerationFailed {
                root: PathBuf::from("/ws"),
                reason: "scripted failure".into(),
            }
            .into());
        }
        Ok(self.files())
    }

    async fn read_lines(&self, path: &Path) -> StackviewResult<Vec<String>> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }

        let label = path
            .strip_prefix("/ws")
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        let text = self.contents.lock().unwrap().get(&label).cloned().flatten();
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        text.map(|t| t.lines().map(str::to_string).collect())
            .ok_or_else(|| {
                ApplicationError::ReadFailed {
                    path: path.to_path_buf(),
                    reason: "scripted failure".into(),
                }
                .into()
            })
    }
}
