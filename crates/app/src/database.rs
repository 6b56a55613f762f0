//! Database connection management

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::{MigrateError, Migrator},
    query,
};

/// SQL used to downgrade a freshly opened transaction to read-only.
pub const SET_READ_ONLY_SQL: &str = "SET TRANSACTION READ ONLY";

/// Migrations owned by the client directory database.
pub static CLIENTS_MIGRATOR: Migrator = sqlx::migrate!("../../migrations/clients");

/// Migrations owned by the sale ledger database.
pub static SALES_MIGRATOR: Migrator = sqlx::migrate!("../../migrations/sales");

/// Transaction scope provider shared by every service.
///
/// Each service operation takes exactly one transaction from here. Committing is
/// explicit; a transaction dropped on an error path is rolled back by sqlx.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Wrap a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a read-write transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction that rejects writes.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or switching it to read-only fails.
    pub async fn begin_read_only(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_READ_ONLY_SQL).execute(&mut *tx).await?;

        Ok(tx)
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply pending migrations from `migrator`.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool, migrator: &Migrator) -> Result<(), MigrateError> {
    migrator.run(pool).await
}
