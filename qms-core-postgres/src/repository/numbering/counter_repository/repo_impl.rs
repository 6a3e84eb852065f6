use async_trait::async_trait;
use qms_core_api::error::NumberingResult;
use qms_core_api::service::counter_store::CounterStore;
use qms_core_db::{
    models::counter::CounterModel,
    repository::{
        find_by_organization_id::FindByOrganizationId, increment_and_get::IncrementAndGet,
    },
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::utils::{get_heapless_string, TryFromRow};

pub struct CounterRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl CounterRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IncrementAndGet<Postgres> for CounterRepositoryImpl {
    async fn increment_and_get(
        &self,
        counter_key: &str,
        organization_id: Uuid,
    ) -> NumberingResult<i64> {
        Self::increment_and_get_impl(self, counter_key, organization_id).await
    }
}

#[async_trait]
impl FindByOrganizationId<Postgres, CounterModel> for CounterRepositoryImpl {
    async fn find_by_organization_id(
        &self,
        organization_id: Uuid,
    ) -> NumberingResult<Vec<CounterModel>> {
        Self::find_by_organization_id_impl(self, organization_id).await
    }
}

// Service-level port; entity-creation flows reach the counter through this
// rather than through the database-generic repository trait.
#[async_trait]
impl CounterStore for CounterRepositoryImpl {
    async fn increment_and_get(
        &self,
        counter_key: &str,
        organization_id: Uuid,
    ) -> NumberingResult<i64> {
        Self::increment_and_get_impl(self, counter_key, organization_id).await
    }
}

impl TryFromRow<PgRow> for CounterModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CounterModel {
            counter_key: get_heapless_string(row, "counter_key")?,
            organization_id: row.try_get("organization_id")?,
            sequence: row.try_get("sequence")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
