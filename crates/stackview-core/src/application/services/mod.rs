//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to answer tree requests:
//! scan files, group them into roots, cache the result per provider and
//! tell observers when it goes stale.

pub mod cache;
pub mod grouping;
pub mod notifier;
pub mod provider;
pub mod scanner;

#[cfg(test)]
pub(crate) mod test_support;

pub use cache::{CacheStatus, Roots, TreeCache};
pub use grouping::{group_by_category, group_by_matches};
pub use notifier::ChangeNotifier;
pub use provider::{ProviderSet, TreeProvider};
pub use scanner::{LineScanner, scan_lines};
