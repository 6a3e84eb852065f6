pub mod chain_resolver;
pub mod counter_store;
pub mod number_formatter;
pub mod traceability_service;

// Re-exports
pub use chain_resolver::*;
pub use counter_store::*;
pub use number_formatter::*;
pub use traceability_service::*;
