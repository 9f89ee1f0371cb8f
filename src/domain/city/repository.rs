use super::entity::City;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// Read-only access to stored cities.
///
/// A missing name is `Ok(None)`; errors are reserved for store failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<City>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<City>, DomainError>;
}
