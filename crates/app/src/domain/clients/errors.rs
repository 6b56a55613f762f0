//! Clients service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientsServiceError {
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ClientsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
