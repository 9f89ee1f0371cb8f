use crate::{application::cities::service::CityService, config::Config};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub city_service: Arc<CityService>,
}
