//! Application layer for Stackview.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TreeProvider, ProviderSet, TreeCache)
//! - **Ports**: Interface definitions (traits) for the host and the workspace
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! matching or naming rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CacheStatus, ChangeNotifier, LineScanner, ProviderSet, TreeCache, TreeProvider};

// Re-export port traits (for adapter implementation)
pub use ports::{TreeDataProvider, WorkspaceFiles};

pub use error::ApplicationError;
