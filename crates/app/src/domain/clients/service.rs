//! Clients service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::clients::{
        data::NewClient,
        errors::ClientsServiceError,
        records::{ClientId, ClientRecord},
        repository::PgClientsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgClientsService {
    db: Db,
    repository: PgClientsRepository,
}

impl PgClientsService {
    /// Client directory service backed by `db`.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgClientsRepository::new(),
        }
    }
}

#[async_trait]
impl ClientsService for PgClientsService {
    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError> {
        debug!(?client, "request to save client");

        let mut tx = self.db.begin().await?;

        let created = self.repository.insert(&mut tx, &client).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_client(
        &self,
        client: ClientId,
    ) -> Result<Option<ClientRecord>, ClientsServiceError> {
        debug!(%client, "request to get client");

        let mut tx = self.db.begin_read_only().await?;

        let found = self.repository.find_by_id(&mut tx, client).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError> {
        debug!("request to get all clients");

        let mut tx = self.db.begin_read_only().await?;

        let clients = self.repository.find_all(&mut tx).await?;

        tx.commit().await?;

        Ok(clients)
    }

    async fn update_client(
        &self,
        client: ClientRecord,
    ) -> Result<Option<ClientRecord>, ClientsServiceError> {
        debug!(?client, "request to update client");

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update(&mut tx, &client).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_client(&self, client: ClientId) -> Result<(), ClientsServiceError> {
        debug!(%client, "request to delete client");

        let mut tx = self.db.begin().await?;

        self.repository.delete_by_id(&mut tx, client).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// Persists a new client and returns it with its assigned id.
    async fn create_client(&self, client: NewClient) -> Result<ClientRecord, ClientsServiceError>;

    /// Retrieve a single client, `None` when no client has this id.
    async fn get_client(&self, client: ClientId)
    -> Result<Option<ClientRecord>, ClientsServiceError>;

    /// Retrieves all clients.
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError>;

    /// Overwrites an existing client. Returns `None` without writing when the id is unknown.
    async fn update_client(
        &self,
        client: ClientRecord,
    ) -> Result<Option<ClientRecord>, ClientsServiceError>;

    /// Deletes a client. Unknown ids are ignored.
    async fn delete_client(&self, client: ClientId) -> Result<(), ClientsServiceError>;
}
