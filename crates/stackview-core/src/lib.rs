//! Stackview Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stackview, a
//! set of navigable trees over a React/TypeScript workspace: files by
//! category, JSX component usages, hook calls and RPC procedure definitions.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         stackview-cli (host)            │
//! │     (Calls the Driving Port)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (TreeProvider, ProviderSet, TreeCache) │
//! │     Populate, cache, notify             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: WorkspaceFiles)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stackview-adapters (Infrastructure)   │
//! │ (LocalWorkspace, MemoryWorkspace, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TreeNode, ScanPattern, inflector, ...) │
//! │         No I/O, no async                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stackview_core::prelude::*;
//!
//! # async fn run(workspace: Arc<dyn WorkspaceFiles>) -> StackviewResult<()> {
//! let providers = ProviderSet::new(workspace, WorkspaceSettings::default())?;
//! let hooks = providers.get(TreeKind::Hooks);
//!
//! for file in hooks.children(None).await? {
//!     for call in hooks.children(Some(&file)).await? {
//!         println!("{}: {}", file.label(), call.label());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProviderSet, TreeProvider,
        ports::{TreeDataProvider, WorkspaceFiles},
    };
    pub use crate::domain::{
        FileRef, Inflection, NodeCommand, ScanPattern, TreeChanged, TreeItem, TreeKind, TreeNode,
        WorkspaceEvent, WorkspaceSettings,
    };
    pub use crate::error::{StackviewError, StackviewResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
