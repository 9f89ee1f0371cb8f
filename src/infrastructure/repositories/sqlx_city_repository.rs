use crate::domain::{
    city::{entity::City, repository::CityRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

pub struct SqlxCityRepository {
    pub pool: PgPool,
}

impl SqlxCityRepository {
    /// Creates a new repository over the given PostgreSQL pool.
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxCityRepository with connection pool");
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::Unavailable(err.to_string())
        }
        other => DomainError::InfrastructureError(other.to_string()),
    }
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        let cities: Vec<City> =
            sqlx::query_as("SELECT id, name, population FROM cities ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(store_error)?;
        debug!(count = cities.len(), "loaded cities");
        Ok(cities)
    }

    /// Exact, case-sensitive match. Duplicate names resolve to the lowest id.
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<City>, DomainError> {
        sqlx::query_as(
            "SELECT id, name, population FROM cities WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)
    }
}
