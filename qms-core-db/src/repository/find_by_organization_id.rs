use async_trait::async_trait;
use qms_core_api::error::NumberingResult;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for listing entities belonging to one tenant
///
/// Read-only audit surface: issuance never goes through this trait, it reads
/// counters without incrementing only to inspect or report on them.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type returned by the listing
#[async_trait]
pub trait FindByOrganizationId<DB: Database, T>: Send + Sync {
    /// Load all entities owned by the given tenant
    ///
    /// # Arguments
    /// * `organization_id` - The tenant to filter by
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All matching entities, possibly empty
    /// * `Err` - An error if the query could not be executed
    async fn find_by_organization_id(&self, organization_id: Uuid) -> NumberingResult<Vec<T>>;
}
