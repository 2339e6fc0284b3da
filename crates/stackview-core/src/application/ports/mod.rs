//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stackview-adapters` implement
//! the driven ports; hosts (the CLI, an editor bridge) call the driving ones.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `WorkspaceFiles`: file enumeration and text reads
//!
//! - **Driving (Input) Ports**: Called by the host, implemented by application
//!   - `TreeDataProvider`: tree items, children, refresh, change events

pub mod input;
pub mod output;

pub use input::TreeDataProvider;
pub use output::WorkspaceFiles;
