use qms_core_api::error::{NumberingError, NumberingResult};
use sqlx::Row;
use uuid::Uuid;

use super::repo_impl::CounterRepositoryImpl;

impl CounterRepositoryImpl {
    pub(super) async fn increment_and_get_impl(
        repo: &CounterRepositoryImpl,
        counter_key: &str,
        organization_id: Uuid,
    ) -> NumberingResult<i64> {
        if counter_key.is_empty() {
            return Err(NumberingError::InvalidKey(
                "counter key must not be empty".to_string(),
            ));
        }

        // Single-statement upsert: the row is created at 1 or incremented in
        // one indivisible step, so two concurrent callers can never observe
        // the same sequence value. Runs auto-committed on the pool; the
        // returned value is durable before this function returns.
        let row = sqlx::query(
            r#"
            INSERT INTO numbering_counter (counter_key, organization_id, sequence)
            VALUES ($1, $2, 1)
            ON CONFLICT (counter_key)
            DO UPDATE SET sequence = numbering_counter.sequence + 1, updated_at = NOW()
            RETURNING sequence
            "#,
        )
        .bind(counter_key)
        .bind(organization_id)
        .fetch_one(repo.pool.as_ref())
        .await
        .map_err(|e| NumberingError::StoreUnavailable(e.to_string()))?;

        let sequence: i64 = row
            .try_get("sequence")
            .map_err(|e| NumberingError::StoreUnavailable(e.to_string()))?;

        tracing::debug!(counter_key, sequence, "issued sequence value");

        Ok(sequence)
    }
}
