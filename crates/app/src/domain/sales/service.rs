//! Sales service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        clients::records::ClientId,
        sales::{
            data::NewSale,
            errors::SalesServiceError,
            records::{SaleId, SaleRecord},
            repository::PgSalesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgSalesService {
    db: Db,
    repository: PgSalesRepository,
}

impl PgSalesService {
    /// Sale ledger service backed by `db`.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSalesRepository::new(),
        }
    }
}

#[async_trait]
impl SalesService for PgSalesService {
    async fn create_sale(&self, sale: NewSale) -> Result<SaleRecord, SalesServiceError> {
        debug!(?sale, "request to save sale");

        let mut tx = self.db.begin().await?;

        let created = self.repository.insert(&mut tx, &sale).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_sale(&self, sale: SaleId) -> Result<Option<SaleRecord>, SalesServiceError> {
        debug!(%sale, "request to get sale");

        let mut tx = self.db.begin_read_only().await?;

        let found = self.repository.find_by_id(&mut tx, sale).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError> {
        debug!("request to get all sales");

        let mut tx = self.db.begin_read_only().await?;

        let sales = self.repository.find_all(&mut tx).await?;

        tx.commit().await?;

        Ok(sales)
    }

    async fn list_sales_by_client(
        &self,
        client: ClientId,
    ) -> Result<Vec<SaleRecord>, SalesServiceError> {
        debug!(%client, "request to get sales by client id");

        let mut tx = self.db.begin_read_only().await?;

        let sales = self.repository.find_by_client_id(&mut tx, client).await?;

        tx.commit().await?;

        Ok(sales)
    }

    async fn update_sale(&self, sale: SaleRecord) -> Result<Option<SaleRecord>, SalesServiceError> {
        debug!(?sale, "request to update sale");

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update(&mut tx, &sale).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_sale(&self, sale: SaleId) -> Result<(), SalesServiceError> {
        debug!(%sale, "request to delete sale");

        let mut tx = self.db.begin().await?;

        self.repository.delete_by_id(&mut tx, sale).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Persists a new sale and returns it with its assigned id.
    async fn create_sale(&self, sale: NewSale) -> Result<SaleRecord, SalesServiceError>;

    /// Retrieve a single sale, `None` when no sale has this id.
    async fn get_sale(&self, sale: SaleId) -> Result<Option<SaleRecord>, SalesServiceError>;

    /// Retrieves all sales.
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError>;

    /// Retrieves every sale referencing `client`.
    async fn list_sales_by_client(
        &self,
        client: ClientId,
    ) -> Result<Vec<SaleRecord>, SalesServiceError>;

    /// Overwrites an existing sale. Returns `None` without writing when the id is unknown.
    async fn update_sale(&self, sale: SaleRecord) -> Result<Option<SaleRecord>, SalesServiceError>;

    /// Deletes a sale. Unknown ids are ignored.
    async fn delete_sale(&self, sale: SaleId) -> Result<(), SalesServiceError>;
}
