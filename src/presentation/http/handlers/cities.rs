use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    application::cities::dto::CityListResponse,
    domain::city::entity::City,
    presentation::http::{errors::AppError, state::AppState},
};

pub async fn list_cities(
    State(state): State<AppState>,
) -> Result<Json<CityListResponse>, AppError> {
    let cities = state.city_service.find_all().await?;
    Ok(Json(cities.into()))
}

pub async fn get_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<City>, AppError> {
    let city = state
        .city_service
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("City {} not found", name)))?;

    Ok(Json(city))
}
