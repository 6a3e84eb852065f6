use async_trait::async_trait;
use qms_core_api::error::NumberingResult;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for the atomic increment-and-read of one counter
///
/// This trait provides the single write operation of the numbering subsystem.
/// The create-or-increment must be one indivisible step at the storage layer:
/// concurrent callers with the same key must never observe the same returned
/// value, and the value must be durably committed before the call returns.
/// There is intentionally no companion read operation on the issuance path;
/// a counter is never read without also incrementing it.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl IncrementAndGet<Postgres> for CounterRepositoryImpl {
///     async fn increment_and_get(&self, counter_key: &str, organization_id: Uuid) -> NumberingResult<i64> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait IncrementAndGet<DB: Database>: Send + Sync {
    /// Atomically create the counter at 1 if absent, or increment it and
    /// return the new value
    ///
    /// # Arguments
    /// * `counter_key` - Non-empty scope key addressing the counter row
    /// * `organization_id` - Tenant owning the counter
    ///
    /// # Returns
    /// * `Ok(i64)` - The post-increment sequence value
    /// * `Err(NumberingError::InvalidKey)` - The key is empty
    /// * `Err(NumberingError::StoreUnavailable)` - The statement failed
    async fn increment_and_get(
        &self,
        counter_key: &str,
        organization_id: Uuid,
    ) -> NumberingResult<i64>;
}
