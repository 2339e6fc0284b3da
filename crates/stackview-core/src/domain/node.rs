//! Tree model shared by every provider.
//!
//! A [`TreeNode`] is either a leaf or a branch. Branches are made by
//! consuming a leaf with [`TreeNode::into_branch`], so a node never plays both
//! roles and its children are assigned exactly once.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A workspace file as returned by the enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileRef {
    /// Resource locator used to open the file.
    pub path: PathBuf,
    /// Display label (file name, or workspace-relative path).
    pub label: String,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// Build a reference labelled with the file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Position of a match: file plus 0-based line index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: FileRef,
    pub line: usize,
}

/// What the host should do when a node is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum NodeCommand {
    /// Open the file.
    OpenFile { path: PathBuf },
    /// Open the file and move the cursor to `line` (0-based).
    GoToLine { path: PathBuf, line: usize },
}

impl NodeCommand {
    pub fn path(&self) -> &Path {
        match self {
            Self::OpenFile { path } | Self::GoToLine { path, .. } => path,
        }
    }
}

/// One entry of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    tooltip: Option<String>,
    location: Option<SourceLocation>,
    command: Option<NodeCommand>,
    children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// A bare leaf with only a label.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            location: None,
            command: None,
            children: None,
        }
    }

    /// A grouping node with its children.
    pub fn group(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::leaf(label).into_branch(children)
    }

    /// A file leaf that opens the file when activated.
    pub fn file(file: &FileRef) -> Self {
        Self {
            label: file.label.clone(),
            tooltip: Some(file.path.display().to_string()),
            location: None,
            command: Some(NodeCommand::OpenFile {
                path: file.path.clone(),
            }),
            children: None,
        }
    }

    /// A match leaf pointing at `line` of `file`.
    pub fn line_match(label: impl Into<String>, file: &FileRef, line: usize) -> Self {
        Self {
            label: label.into(),
            tooltip: Some(format!("{}:{}", file.label, line + 1)),
            location: Some(SourceLocation {
                file: file.clone(),
                line,
            }),
            command: Some(NodeCommand::GoToLine {
                path: file.path.clone(),
                line,
            }),
            children: None,
        }
    }

    /// Turn this leaf into a branch owning `children`.
    ///
    /// Debug builds assert that `self` was still a leaf.
    pub fn into_branch(mut self, children: Vec<TreeNode>) -> Self {
        debug_assert!(self.children.is_none(), "node '{}' is already a branch", self.label);
        self.children = Some(children);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn command(&self) -> Option<&NodeCommand> {
        self.command.as_ref()
    }

    /// Children of a branch; `None` for a leaf.
    pub fn children(&self) -> Option<&[TreeNode]> {
        self.children.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether this branch has at least one child.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(TreeNode::subtree_len)
            .sum::<usize>()
    }
}

/// Expansion state of a rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collapsible {
    None,
    Collapsed,
    Expanded,
}

/// Renderable form of a [`TreeNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub collapsible: Collapsible,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<NodeCommand>,
}

impl From<&TreeNode> for TreeItem {
    fn from(node: &TreeNode) -> Self {
        Self {
            label: node.label.clone(),
            tooltip: node.tooltip.clone(),
            collapsible: if node.is_leaf() {
                Collapsible::None
            } else {
                Collapsible::Collapsed
            },
            command: node.command.clone(),
        }
    }
}
