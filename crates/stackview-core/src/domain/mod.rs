// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stackview.
//!
//! Pure data and logic: the tree model, line patterns, string-form helpers and
//! workspace settings. All I/O (file enumeration, reads, watching) goes
//! through ports defined in the application layer.
//!
//! ## Rules
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or host calls
//! - **Few crates**: std + thiserror, plus regex for line patterns and serde
//!   for settings/renderable items
//! - **Value types**: everything is Clone + PartialEq
//!
// Public API - what the world sees
pub mod error;
pub mod event;
pub mod inflector;
pub mod node;
pub mod pattern;
pub mod settings;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use event::{TreeChanged, WorkspaceEvent};
pub use inflector::Inflection;
pub use node::{Collapsible, FileRef, NodeCommand, SourceLocation, TreeItem, TreeNode};
pub use pattern::{STANDARD_HOOKS, ScanPattern, TreeKind};
pub use settings::{DEFAULT_SCAN_CONCURRENCY, WorkspaceSettings};
