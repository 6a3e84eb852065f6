pub mod repo_impl;
pub mod increment_and_get;
pub mod find_by_organization_id;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CounterRepositoryImpl;
