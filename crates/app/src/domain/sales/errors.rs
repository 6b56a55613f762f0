//! Sales service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesServiceError {
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SalesServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
