use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    /// The store could not be reached (pool exhausted, closed, or I/O failure).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
