use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

use crate::presentation::http::{
    errors::PageError,
    state::AppState,
    views::{ShowCitiesView, ShowCityView},
};

pub async fn show_cities(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let cities = state.city_service.find_all().await?;
    let view = ShowCitiesView { cities };
    Ok(Html(view.render()?))
}

/// Renders the detail page. An unknown name still renders the page, with an
/// empty city and a 404 status.
pub async fn show_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Html<String>), PageError> {
    let city = state.city_service.find_by_name(&name).await?;
    let status = if city.is_some() {
        StatusCode::OK
    } else {
        tracing::debug!(%name, "no city matched");
        StatusCode::NOT_FOUND
    };

    let view = ShowCityView { name, city };
    Ok((status, Html(view.render()?)))
}
