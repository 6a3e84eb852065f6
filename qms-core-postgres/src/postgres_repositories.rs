use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use qms_core_api::service::traceability_service::TraceabilityServiceImpl;

use crate::repository::numbering::counter_repository::CounterRepositoryImpl;
use crate::repository::numbering::factory::{NumberingRepoFactory, NumberingRepositories};

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    numbering_factory: Arc<NumberingRepoFactory>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            numbering_factory: NumberingRepoFactory::new(),
        }
    }

    /// Create all numbering repositories sharing the connection pool
    pub fn create_numbering_repositories(&self) -> NumberingRepositories {
        self.numbering_factory.build_all_repos(self.pool.clone())
    }

    /// Build the per-tenant numbering façade used by entity-creation flows.
    pub fn build_traceability_service(
        &self,
        organization_id: Uuid,
    ) -> TraceabilityServiceImpl<CounterRepositoryImpl> {
        let counter_repository = self.numbering_factory.build_counter_repo(self.pool.clone());
        TraceabilityServiceImpl::new(counter_repository, organization_id)
    }
}
