pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use config::TaskdConfig;
use store::TaskStore;

/// Shared application state passed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<TaskdConfig>,
    /// The in-memory task collection. Mutating handlers take the write
    /// half, so the concurrent runtime serializes writers and the store's
    /// id-uniqueness and list-order invariants hold.
    pub store: Arc<RwLock<TaskStore>>,
    pub started_at: Instant,
}

impl AppContext {
    /// Build the context with a freshly seeded store.
    pub fn new(config: TaskdConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(TaskStore::seeded())),
            started_at: Instant::now(),
        }
    }
}
