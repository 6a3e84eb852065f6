pub mod counter_repository;
pub mod factory;

pub use counter_repository::CounterRepositoryImpl;
pub use factory::{NumberingRepoFactory, NumberingRepositories};
