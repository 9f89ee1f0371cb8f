//! Server-rendered views.
//!
//! Each view struct is the render context of one template: its field names are
//! the keys the template reads.

use crate::domain::city::entity::City;
use askama::Template;

#[derive(Template)]
#[template(path = "showCities.html")]
pub struct ShowCitiesView {
    pub cities: Vec<City>,
}

/// `city` is `None` when no record matched `name`.
#[derive(Template)]
#[template(path = "showCity.html")]
pub struct ShowCityView {
    pub name: String,
    pub city: Option<City>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub status: u16,
    pub message: String,
}
