//! Driving (input) ports - called by the host.
//!
//! A host (the CLI, or an editor bridge) renders trees through this trait and
//! never touches caches or scanners directly.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::{TreeChanged, TreeItem, TreeKind, TreeNode, WorkspaceEvent};
use crate::error::StackviewResult;

/// A tree view data source.
///
/// Implemented by `crate::application::services::TreeProvider`.
#[async_trait]
pub trait TreeDataProvider: Send + Sync {
    /// Which tree this provider serves.
    fn kind(&self) -> TreeKind;

    /// Renderable form of `node`.
    fn tree_item(&self, node: &TreeNode) -> TreeItem {
        TreeItem::from(node)
    }

    /// Root nodes when `node` is `None`, otherwise the node's own children
    /// (empty for leaves).
    async fn children(&self, node: Option<&TreeNode>) -> StackviewResult<Vec<TreeNode>>;

    /// Subscribe to change notifications. Each notification means "request
    /// the root children again".
    fn subscribe(&self) -> broadcast::Receiver<TreeChanged>;

    /// Drop the cached tree and notify observers.
    fn refresh(&self);

    /// React to a workspace event. Returns `true` if the tree was dropped.
    fn handle_event(&self, event: &WorkspaceEvent) -> bool;

    /// Release the change-notification channel.
    fn dispose(&self);
}
