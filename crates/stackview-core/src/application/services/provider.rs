//! Tree providers - one per tree kind, plus the set that routes host events.
//!
//! A provider owns its [`TreeCache`] and knows how to populate it:
//! - `files`: enumerate, then group by watch category
//! - `components` / `hooks` / `routes`: enumerate, scan each file for the
//!   kind's pattern, keep files with matches
//!
//! Children of a non-root node are read straight from the node; only root
//! requests go through the cache.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{TreeDataProvider, WorkspaceFiles},
    },
    domain::{TreeChanged, TreeKind, TreeNode, WorkspaceEvent, WorkspaceSettings},
    error::StackviewResult,
};

use super::{
    cache::{CacheStatus, TreeCache},
    grouping::{group_by_category, group_by_matches},
    scanner::LineScanner,
};

/// Data source for one tree.
pub struct TreeProvider {
    kind: TreeKind,
    workspace: Arc<dyn WorkspaceFiles>,
    settings: Arc<WorkspaceSettings>,
    cache: TreeCache,
}

impl TreeProvider {
    pub fn new(
        kind: TreeKind,
        workspace: Arc<dyn WorkspaceFiles>,
        settings: Arc<WorkspaceSettings>,
    ) -> Self {
        Self {
            kind,
            workspace,
            settings,
            cache: TreeCache::new(kind.as_str()),
        }
    }

    pub fn status(&self) -> CacheStatus {
        self.cache.status()
    }

    /// How many times the root list has been built.
    pub fn populations(&self) -> u64 {
        self.cache.populations()
    }

    fn population(&self) -> BoxFuture<'static, StackviewResult<Vec<TreeNode>>> {
        let kind = self.kind;
        let workspace = Arc::clone(&self.workspace);
        let settings = Arc::clone(&self.settings);
        async move { populate(kind, workspace, settings).await }.boxed()
    }
}

#[instrument(skip(workspace, settings), fields(tree = %kind))]
async fn populate(
    kind: TreeKind,
    workspace: Arc<dyn WorkspaceFiles>,
    settings: Arc<WorkspaceSettings>,
) -> StackviewResult<Vec<TreeNode>> {
    let files = workspace.list_files().await?;
    if files.is_empty() {
        debug!("Workspace has no matching files");
        return Ok(Vec::new());
    }

    let roots = match kind.pattern() {
        None => group_by_category(&files, &settings.watch),
        Some(pattern) => {
            let scanner = LineScanner::new(workspace, pattern, settings.scan_concurrency);
            group_by_matches(&scanner, files).await
        }
    };

    info!(roots = roots.len(), "Tree populated");
    Ok(roots)
}

#[async_trait]
impl TreeDataProvider for TreeProvider {
    fn kind(&self) -> TreeKind {
        self.kind
    }

    async fn children(&self, node: Option<&TreeNode>) -> StackviewResult<Vec<TreeNode>> {
        if let Some(node) = node {
            return Ok(node.children().map(<[TreeNode]>::to_vec).unwrap_or_default());
        }

        if self.cache.is_disposed() {
            return Err(ApplicationError::Disposed {
                provider: self.kind.as_str(),
            }
            .into());
        }

        let roots = self.cache.get_or_populate(|| self.population()).await?;
        Ok(roots.as_ref().clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<TreeChanged> {
        self.cache.subscribe()
    }

    fn refresh(&self) {
        if self.cache.is_disposed() {
            return;
        }
        self.cache.invalidate();
    }

    fn handle_event(&self, event: &WorkspaceEvent) -> bool {
        if !event.invalidates() || self.cache.is_disposed() {
            return false;
        }
        debug!(tree = %self.kind, path = %event.path().display(), "Workspace change");
        self.cache.invalidate();
        true
    }

    fn dispose(&self) {
        self.cache.dispose();
    }
}

impl std::fmt::Debug for TreeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeProvider")
            .field("kind", &self.kind)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// The four providers over one workspace.
///
/// Host events are fanned out to every provider; each decides for itself
/// whether to drop its tree.
#[derive(Debug)]
pub struct ProviderSet {
    providers: Vec<Arc<TreeProvider>>,
}

impl ProviderSet {
    /// Build one provider per [`TreeKind`]. Fails on invalid settings.
    pub fn new(
        workspace: Arc<dyn WorkspaceFiles>,
        settings: WorkspaceSettings,
    ) -> StackviewResult<Self> {
        settings.validate()?;
        let settings = Arc::new(settings);
        let providers = TreeKind::ALL
            .into_iter()
            .map(|kind| {
                Arc::new(TreeProvider::new(
                    kind,
                    Arc::clone(&workspace),
                    Arc::clone(&settings),
                ))
            })
            .collect();
        Ok(Self { providers })
    }

    pub fn get(&self, kind: TreeKind) -> Arc<TreeProvider> {
        // Built from TreeKind::ALL, so every kind is present.
        let index = TreeKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        Arc::clone(&self.providers[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TreeProvider>> {
        self.providers.iter()
    }

    /// Forward `event` to every provider. Returns how many dropped a tree.
    pub fn handle_event(&self, event: &WorkspaceEvent) -> usize {
        self.providers
            .iter()
            .filter(|p| p.handle_event(event))
            .count()
    }

    pub fn refresh_all(&self) {
        self.providers.iter().for_each(|p| p.refresh());
    }

    pub fn dispose_all(&self) {
        self.providers.iter().for_each(|p| p.dispose());
    }
}
