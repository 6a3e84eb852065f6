use async_trait::async_trait;
use uuid::Uuid;

use crate::error::NumberingResult;

/// Persistent keyed counter with a single atomic increment-and-read
/// operation.
///
/// Implementations must make the create-or-increment a single indivisible
/// step at the storage layer: two concurrent callers with the same key must
/// never observe the same returned value, and the returned value must be
/// durably committed before the call returns. There is deliberately no way to
/// read a counter without incrementing it on this interface.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically creates the counter at 1 if absent, or increments it and
    /// returns the new value.
    ///
    /// # Arguments
    /// * `counter_key` - Non-empty scope key addressing one counter row
    /// * `organization_id` - Tenant owning the counter, stored alongside it
    ///
    /// # Returns
    /// * `Ok(i64)` - The post-increment sequence value
    /// * `Err(NumberingError::InvalidKey)` - The key is empty
    /// * `Err(NumberingError::StoreUnavailable)` - The store could not be
    ///   reached or the statement failed
    async fn increment_and_get(
        &self,
        counter_key: &str,
        organization_id: Uuid,
    ) -> NumberingResult<i64>;
}
