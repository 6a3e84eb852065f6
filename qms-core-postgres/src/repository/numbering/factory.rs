use sqlx::PgPool;
use std::sync::Arc;

use super::counter_repository::CounterRepositoryImpl;

/// Factory for creating numbering module repositories
///
/// This should be used as a singleton throughout the application; the
/// repositories it builds share the given connection pool.
#[derive(Default)]
pub struct NumberingRepoFactory {
    // No caches here: counter values must never be served from memory.
}

impl NumberingRepoFactory {
    /// Create a new NumberingRepoFactory singleton
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build a CounterRepository backed by the given pool
    pub fn build_counter_repo(&self, pool: Arc<PgPool>) -> Arc<CounterRepositoryImpl> {
        Arc::new(CounterRepositoryImpl::new(pool))
    }

    /// Build all numbering repositories backed by the given pool
    pub fn build_all_repos(&self, pool: Arc<PgPool>) -> NumberingRepositories {
        NumberingRepositories {
            counter_repository: self.build_counter_repo(pool),
        }
    }
}

/// Container for all numbering module repositories
pub struct NumberingRepositories {
    pub counter_repository: Arc<CounterRepositoryImpl>,
}
