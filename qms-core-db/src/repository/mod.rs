pub mod find_by_organization_id;
pub mod increment_and_get;

// Re-exports
pub use find_by_organization_id::*;
pub use increment_and_get::*;
