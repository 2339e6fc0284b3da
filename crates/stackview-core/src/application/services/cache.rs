//! Per-provider root cache with single-flight population.
//!
//! ```text
//!            get (miss)                 settle Ok
//!   Empty ───────────────► Pending ─────────────────► Populated
//!     ▲                      │  │                          │
//!     │      settle Err      │  │ invalidate               │ invalidate
//!     └──────────────────────┘  └──────────► Empty ◄───────┘
//! ```
//!
//! Every request that arrives while a population is pending awaits the same
//! shared future, so one miss means exactly one enumeration. Each
//! invalidation bumps a generation counter; a population started under an
//! older generation still answers its own waiters but is never stored.
//!
//! The state lock is a plain `std::sync::Mutex` and is never held across an
//! `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::domain::{TreeChanged, TreeNode};
use crate::error::StackviewResult;

use super::notifier::ChangeNotifier;

/// Cached root list.
pub type Roots = Arc<Vec<TreeNode>>;

type Population = Shared<BoxFuture<'static, StackviewResult<Roots>>>;

enum CacheState {
    Empty,
    Pending { generation: u64, population: Population },
    Populated(Roots),
}

/// Observable cache state, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Empty,
    Pending,
    Populated,
}

struct Inner {
    state: CacheState,
    generation: u64,
    populations: u64,
}

/// Root cache for one tree.
pub struct TreeCache {
    name: &'static str,
    inner: Mutex<Inner>,
    changes: ChangeNotifier,
}

impl TreeCache {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(Inner {
                state: CacheState::Empty,
                generation: 0,
                populations: 0,
            }),
            changes: ChangeNotifier::default(),
        }
    }

    // The state is replaced wholesale under the lock, so a poisoned guard
    // still holds a consistent value.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!(cache = self.name, "Cache lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Cached roots, or the result of the pending population, or a new
    /// population started with `populate`.
    ///
    /// `populate` is only called on a miss. A failed population is handed to
    /// every waiter and leaves the cache empty, so the next call retries.
    pub async fn get_or_populate<F>(&self, populate: F) -> StackviewResult<Roots>
    where
        F: FnOnce() -> BoxFuture<'static, StackviewResult<Vec<TreeNode>>>,
    {
        let (generation, population) = {
            let mut inner = self.lock();
            match &inner.state {
                CacheState::Populated(roots) => return Ok(Arc::clone(roots)),
                CacheState::Pending {
                    generation,
                    population,
                } => {
                    debug!(cache = self.name, "Joining pending population");
                    (*generation, population.clone())
                }
                CacheState::Empty => {
                    let generation = inner.generation;
                    let population = populate().map(|r| r.map(Arc::new)).boxed().shared();
                    inner.state = CacheState::Pending {
                        generation,
                        population: population.clone(),
                    };
                    inner.populations += 1;
                    debug!(cache = self.name, generation, "Starting population");
                    (generation, population)
                }
            }
        };

        let result = population.await;
        self.settle(generation, &result);
        result
    }

    fn settle(&self, generation: u64, result: &StackviewResult<Roots>) {
        let mut inner = self.lock();
        let current = matches!(
            &inner.state,
            CacheState::Pending { generation: g, .. } if *g == generation
        );
        if !current {
            if inner.generation != generation {
                debug!(
                    cache = self.name,
                    generation,
                    current = inner.generation,
                    "Discarding superseded population"
                );
            }
            return;
        }

        inner.state = match result {
            Ok(roots) => {
                info!(cache = self.name, roots = roots.len(), "Tree cached");
                CacheState::Populated(Arc::clone(roots))
            }
            Err(e) => {
                warn!(cache = self.name, error = %e, "Population failed, cache left empty");
                CacheState::Empty
            }
        };
    }

    /// Roots if populated, without starting a population.
    pub fn cached(&self) -> Option<Roots> {
        match &self.lock().state {
            CacheState::Populated(roots) => Some(Arc::clone(roots)),
            _ => None,
        }
    }

    pub fn status(&self) -> CacheStatus {
        match self.lock().state {
            CacheState::Empty => CacheStatus::Empty,
            CacheState::Pending { .. } => CacheStatus::Pending,
            CacheState::Populated(_) => CacheStatus::Populated,
        }
    }

    /// Drop the cached or pending roots and notify subscribers once.
    ///
    /// Returns the new generation.
    pub fn invalidate(&self) -> u64 {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.state = CacheState::Empty;
            inner.generation
        };
        let receivers = self.changes.publish(TreeChanged { generation });
        debug!(cache = self.name, generation, receivers, "Cache invalidated");
        generation
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// How many populations have been started.
    pub fn populations(&self) -> u64 {
        self.lock().populations
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TreeChanged> {
        self.changes.subscribe()
    }

    pub fn dispose(&self) {
        self.changes.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.changes.is_disposed()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for TreeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeCache")
            .field("name", &self.name)
            .field("status", &self.status())
            .field("generation", &self.generation())
            .finish()
    }
}
