//! File watcher adapter.
//!
//! Watches the workspace root recursively and forwards debounced file events
//! as [`WorkspaceEvent`]s over a tokio channel. Paths outside the
//! include/exclude globs are dropped before they reach the channel.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{
    EventKind, RecommendedWatcher, RecursiveMode,
    event::{CreateKind, ModifyKind, RemoveKind, RenameMode},
};
use notify_debouncer_full::{DebounceEventResult, Debouncer, RecommendedCache, new_debouncer};
use stackview_core::{
    application::ApplicationError, domain::WorkspaceEvent, error::StackviewResult,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::workspace::{PathFilter, relative_to};

/// Default debounce duration in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Configuration for the workspace watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    pub debounce: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl WatcherConfig {
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }
}

/// Live watcher over a workspace root. Dropping it stops the watch and
/// closes the event channel.
pub struct WorkspaceWatcher {
    root: PathBuf,
    _debouncer: Debouncer<RecommendedWatcher, RecommendedCache>,
}

impl WorkspaceWatcher {
    /// Start watching `root`. Events arrive on the returned receiver.
    pub fn start(
        root: impl Into<PathBuf>,
        filter: PathFilter,
        config: &WatcherConfig,
    ) -> StackviewResult<(Self, mpsc::UnboundedReceiver<WorkspaceEvent>)> {
        let root = root.into();
        let (tx, rx) = mpsc::unbounded_channel();

        let handler_root = root.clone();
        let mut debouncer = new_debouncer(
            config.debounce,
            None,
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    for event in events.iter().flat_map(|e| translate(&e.event)) {
                        if !is_relevant(&handler_root, &filter, &event) {
                            continue;
                        }
                        debug!(?event, "Workspace event");
                        // Receiver gone means the host stopped listening.
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                }
                Err(errors) => {
                    for error in errors {
                        warn!(error = %error, "File watcher error");
                    }
                }
            },
        )
        .map_err(|e| ApplicationError::WatcherFailed {
            reason: e.to_string(),
        })?;

        debouncer
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|e| ApplicationError::WatcherFailed {
                reason: format!("{}: {}", root.display(), e),
            })?;

        info!(root = %root.display(), debounce_ms = config.debounce.as_millis() as u64, "Watching workspace");
        Ok((
            Self {
                root,
                _debouncer: debouncer,
            },
            rx,
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl std::fmt::Debug for WorkspaceWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceWatcher")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Map one notify event to workspace events.
///
/// Metadata-only changes and access events produce nothing.
pub fn translate(event: &notify::Event) -> Vec<WorkspaceEvent> {
    let paths = &event.paths;
    match event.kind {
        EventKind::Create(CreateKind::Folder) => Vec::new(),
        EventKind::Create(_) => paths.iter().cloned().map(WorkspaceEvent::Created).collect(),
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) if paths.len() == 2 => {
            vec![WorkspaceEvent::Renamed {
                from: paths[0].clone(),
                to: paths[1].clone(),
            }]
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
            paths.iter().cloned().map(WorkspaceEvent::Deleted).collect()
        }
        EventKind::Modify(ModifyKind::Name(_)) => paths
            .iter()
            .map(|p| WorkspaceEvent::Renamed {
                from: p.clone(),
                to: p.clone(),
            })
            .collect(),
        EventKind::Modify(ModifyKind::Metadata(_)) => Vec::new(),
        EventKind::Modify(_) => paths.iter().cloned().map(WorkspaceEvent::Saved).collect(),
        EventKind::Remove(RemoveKind::Folder) => Vec::new(),
        EventKind::Remove(_) => paths.iter().cloned().map(WorkspaceEvent::Deleted).collect(),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
    }
}

fn is_relevant(root: &Path, filter: &PathFilter, event: &WorkspaceEvent) -> bool {
    let matches = |path: &Path| relative_to(root, path).is_some_and(|rel| filter.is_match(&rel));
    match event {
        WorkspaceEvent::Renamed { from, to } => matches(from) || matches(to),
        other => matches(other.path()),
    }
}
