use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub population: i32,
}

impl City {
    pub fn new(id: i64, name: impl Into<String>, population: i32) -> Self {
        Self {
            id,
            name: name.into(),
            population,
        }
    }
}
