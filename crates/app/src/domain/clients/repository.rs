//! Clients Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::clients::{
    data::NewClient,
    records::{ClientId, ClientRecord},
};

const LIST_CLIENTS_SQL: &str = include_str!("sql/list_clients.sql");
const GET_CLIENT_SQL: &str = include_str!("sql/get_client.sql");
const CREATE_CLIENT_SQL: &str = include_str!("sql/create_client.sql");
const UPDATE_CLIENT_SQL: &str = include_str!("sql/update_client.sql");
const DELETE_CLIENT_SQL: &str = include_str!("sql/delete_client.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgClientsRepository;

impl PgClientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(LIST_CLIENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
    ) -> Result<Option<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(GET_CLIENT_SQL)
            .bind(client.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: &NewClient,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(CREATE_CLIENT_SQL)
            .bind(&client.first_name)
            .bind(&client.last_name)
            .bind(&client.email)
            .bind(&client.address)
            .fetch_one(&mut **tx)
            .await
    }

    /// Overwrite every field of an existing row. `None` when no row has this id.
    pub(crate) async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: &ClientRecord,
    ) -> Result<Option<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(UPDATE_CLIENT_SQL)
            .bind(client.id.into_i64())
            .bind(&client.first_name)
            .bind(&client.last_name)
            .bind(&client.email)
            .bind(&client.address)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CLIENT_SQL)
            .bind(client.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ClientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ClientId::from_i64(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
        })
    }
}
