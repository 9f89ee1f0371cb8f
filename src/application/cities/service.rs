use crate::domain::{
    city::{entity::City, repository::CityRepository},
    shared::errors::DomainError,
};
use std::sync::Arc;
use tracing::instrument;

/// Seam between the HTTP layer and storage. Calls are forwarded unchanged.
pub struct CityService {
    repository: Arc<dyn CityRepository>,
}

impl CityService {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<City>, DomainError> {
        self.repository.find_by_name(name).await
    }
}
