//! Sales Repository

use jiff_sqlx::Date as SqlxDate;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    clients::records::ClientId,
    sales::{
        data::NewSale,
        records::{SaleId, SaleRecord},
    },
};

const LIST_SALES_SQL: &str = include_str!("sql/list_sales.sql");
const LIST_SALES_BY_CLIENT_SQL: &str = include_str!("sql/list_sales_by_client.sql");
const GET_SALE_SQL: &str = include_str!("sql/get_sale.sql");
const CREATE_SALE_SQL: &str = include_str!("sql/create_sale.sql");
const UPDATE_SALE_SQL: &str = include_str!("sql/update_sale.sql");
const DELETE_SALE_SQL: &str = include_str!("sql/delete_sale.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSalesRepository;

impl PgSalesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(LIST_SALES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_client_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
    ) -> Result<Vec<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(LIST_SALES_BY_CLIENT_SQL)
            .bind(client.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: SaleId,
    ) -> Result<Option<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(GET_SALE_SQL)
            .bind(sale.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: &NewSale,
    ) -> Result<SaleRecord, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(CREATE_SALE_SQL)
            .bind(&sale.product_code)
            .bind(sale.client_id.into_i64())
            .bind(SqlxDate::from(sale.operation_date))
            .bind(sale.quantity)
            .bind(sale.amount)
            .fetch_one(&mut **tx)
            .await
    }

    /// Overwrite every field of an existing row. `None` when no row has this id.
    pub(crate) async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: &SaleRecord,
    ) -> Result<Option<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(UPDATE_SALE_SQL)
            .bind(sale.id.into_i64())
            .bind(&sale.product_code)
            .bind(sale.client_id.into_i64())
            .bind(SqlxDate::from(sale.operation_date))
            .bind(sale.quantity)
            .bind(sale.amount)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: SaleId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SALE_SQL)
            .bind(sale.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for SaleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: SaleId::from_i64(row.try_get("id")?),
            product_code: row.try_get("product_code")?,
            client_id: ClientId::from_i64(row.try_get("client_id")?),
            operation_date: row.try_get::<SqlxDate, _>("operation_date")?.to_jiff(),
            quantity: row.try_get("quantity")?,
            amount: row.try_get("amount")?,
        })
    }
}
