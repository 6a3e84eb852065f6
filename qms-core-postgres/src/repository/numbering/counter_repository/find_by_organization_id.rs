use qms_core_api::error::{NumberingError, NumberingResult};
use qms_core_db::models::counter::CounterModel;
use uuid::Uuid;

use super::repo_impl::CounterRepositoryImpl;
use crate::utils::TryFromRow;

impl CounterRepositoryImpl {
    // Read-only audit listing; number issuance never reads a counter without
    // incrementing it.
    pub(super) async fn find_by_organization_id_impl(
        repo: &CounterRepositoryImpl,
        organization_id: Uuid,
    ) -> NumberingResult<Vec<CounterModel>> {
        let rows = sqlx::query(
            r#"
            SELECT counter_key, organization_id, sequence, created_at, updated_at
            FROM numbering_counter
            WHERE organization_id = $1
            ORDER BY counter_key
            "#,
        )
        .bind(organization_id)
        .fetch_all(repo.pool.as_ref())
        .await
        .map_err(|e| NumberingError::StoreUnavailable(e.to_string()))?;

        let mut counters = Vec::with_capacity(rows.len());
        for row in rows {
            counters.push(
                CounterModel::try_from_row(&row)
                    .map_err(|e| NumberingError::StoreUnavailable(e.to_string()))?,
            );
        }
        Ok(counters)
    }
}
