pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::numbering::counter_repository::CounterRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
