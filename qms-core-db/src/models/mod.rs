pub mod counter;

// Re-exports
pub use counter::*;
