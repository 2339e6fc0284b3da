//! Tree rendering for `tree` and `watch`.
//!
//! A provider is walked through the [`TreeDataProvider`] port exactly as an
//! editor would: root children first, then each expanded node's children.

use owo_colors::OwoColorize;
use serde::Serialize;
use stackview_core::{
    application::ports::TreeDataProvider,
    domain::{SourceLocation, TreeItem, TreeNode},
    error::StackviewResult,
};

use crate::cli::TreeFormat;

/// A fully expanded tree for one provider.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedTree {
    pub tree: &'static str,
    pub roots: Vec<RenderedNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedNode {
    #[serde(flatten)]
    pub item: TreeItem,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

/// Walk `provider` down to `depth` levels (all levels when `None`).
pub async fn collect(
    provider: &dyn TreeDataProvider,
    depth: Option<u16>,
) -> StackviewResult<RenderedTree> {
    let remaining = depth.map(|d| d.saturating_sub(1));
    let mut roots = Vec::new();
    for root in provider.children(None).await? {
        roots.push(expand(provider, &root, remaining).await?);
    }
    Ok(RenderedTree {
        tree: provider.kind().as_str(),
        roots,
    })
}

async fn expand(
    provider: &dyn TreeDataProvider,
    node: &TreeNode,
    remaining: Option<u16>,
) -> StackviewResult<RenderedNode> {
    let mut children = Vec::new();
    if node.has_children() && remaining != Some(0) {
        let next = remaining.map(|r| r - 1);
        for child in provider.children(Some(node)).await? {
            children.push(Box::pin(expand(provider, &child, next)).await?);
        }
    }
    Ok(RenderedNode {
        item: provider.tree_item(node),
        location: node.location().cloned(),
        children,
    })
}

/// Render trees in `format`. `color` only affects the `tree` style.
pub fn render(trees: &[RenderedTree], format: TreeFormat, color: bool) -> serde_json::Result<String> {
    match format {
        TreeFormat::Json => match trees {
            [single] => serde_json::to_string_pretty(single),
            many => serde_json::to_string_pretty(many),
        },
        TreeFormat::Tree => Ok(trees
            .iter()
            .map(|t| render_text(t, color, trees.len() > 1))
            .collect::<Vec<_>>()
            .join("\n")),
        TreeFormat::Flat => Ok(trees.iter().flat_map(render_flat).collect::<Vec<_>>().join("\n")),
    }
}

fn render_text(tree: &RenderedTree, color: bool, with_title: bool) -> String {
    let mut lines = Vec::new();
    if with_title {
        lines.push(if color {
            format!("{}", tree.tree.cyan().bold())
        } else {
            format!("[{}]", tree.tree)
        });
    }
    if tree.roots.is_empty() {
        lines.push(if color {
            format!("{}", "(no entries)".dimmed())
        } else {
            "(no entries)".to_string()
        });
    }
    for root in &tree.roots {
        lines.push(decorate(root, color));
        push_children(&mut lines, &root.children, "", color);
    }
    lines.join("\n")
}

fn push_children(lines: &mut Vec<String>, children: &[RenderedNode], prefix: &str, color: bool) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{branch}{}", decorate(child, color)));
        let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
        push_children(lines, &child.children, &nested, color);
    }
}

fn decorate(node: &RenderedNode, color: bool) -> String {
    let label = &node.item.label;
    match (&node.location, color) {
        (Some(loc), true) => format!("{}  {}", label, position(loc).dimmed()),
        (Some(loc), false) => format!("{}  ({})", label, position(loc)),
        (None, true) if !node.children.is_empty() => format!("{}", label.bold()),
        (None, _) => label.clone(),
    }
}

fn position(loc: &SourceLocation) -> String {
    format!("{}:{}", loc.file.label, loc.line + 1)
}

fn render_flat(tree: &RenderedTree) -> Vec<String> {
    let mut lines = Vec::new();
    for root in &tree.roots {
        flatten(root, &mut lines);
    }
    lines
}

fn flatten(node: &RenderedNode, lines: &mut Vec<String>) {
    if node.children.is_empty() {
        lines.push(match &node.location {
            Some(loc) => format!("{}: {}", position(loc), node.item.label),
            None => node.item.label.clone(),
        });
        return;
    }
    for child in &node.children {
        flatten(child, lines);
    }
}
