//! Workspace adapters implementing the `WorkspaceFiles` port.

pub mod filter;
pub mod local;
pub mod memory;

pub use filter::{PathFilter, relative_to};
pub use local::LocalWorkspace;
pub use memory::MemoryWorkspace;
