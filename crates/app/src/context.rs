//! App Context
//!
//! Each service process owns its own database. The client directory context
//! also carries the HTTP client used to reach the sale ledger.

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, CLIENTS_MIGRATOR, Db, SALES_MIGRATOR},
    domain::{
        clients::{ClientsService, PgClientsService},
        sales::{HttpSalesClient, PgSalesService, SalesClient, SalesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

/// Services backing the client directory process.
#[derive(Clone)]
pub struct ClientDirectoryContext {
    pub clients: Arc<dyn ClientsService>,
    pub auth: Arc<dyn AuthService>,
    pub sales: Arc<dyn SalesClient>,
}

impl ClientDirectoryContext {
    /// Build the client directory context, applying its migrations first.
    ///
    /// `sales_service_url` is the base URL of the sale ledger.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(
        url: &str,
        sales_service_url: &str,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool, &CLIENTS_MIGRATOR)
            .await
            .map_err(AppInitError::Migration)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            clients: Arc::new(PgClientsService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
            sales: Arc::new(HttpSalesClient::new(sales_service_url)),
        })
    }
}

/// Services backing the sale ledger process.
#[derive(Clone)]
pub struct SaleLedgerContext {
    pub sales: Arc<dyn SalesService>,
}

impl SaleLedgerContext {
    /// Build the sale ledger context, applying its migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool, &SALES_MIGRATOR)
            .await
            .map_err(AppInitError::Migration)?;

        Ok(Self {
            sales: Arc::new(PgSalesService::new(Db::new(pool))),
        })
    }
}
