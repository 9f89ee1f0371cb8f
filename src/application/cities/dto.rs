use crate::domain::city::entity::City;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityListResponse {
    pub cities: Vec<City>,
    pub total: i64,
}

impl From<Vec<City>> for CityListResponse {
    fn from(cities: Vec<City>) -> Self {
        Self {
            total: cities.len() as i64,
            cities,
        }
    }
}
