//! Remote sales lookup against the sale ledger service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    clients::records::ClientId,
    sales::records::{SaleId, SaleRecord},
};

/// Logical name of the sale ledger service.
pub const SALES_SERVICE_NAME: &str = "sales-service";

/// Fixed address the sale ledger service is reached at.
pub const DEFAULT_SALES_SERVICE_URL: &str = "http://localhost:9001";

/// Sale as exchanged on the wire.
///
/// Field names and the `dd-MM-yyyy` date are fixed by the sale ledger's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: SaleId,
    pub product_code: String,
    pub client_id: ClientId,
    #[serde(with = "crate::domain::sales::date_format")]
    pub operation_date: Date,
    pub quantity: i64,
    pub amount: f64,
}

impl From<SaleRecord> for SaleDto {
    fn from(sale: SaleRecord) -> Self {
        Self {
            id: sale.id,
            product_code: sale.product_code,
            client_id: sale.client_id,
            operation_date: sale.operation_date,
            quantity: sale.quantity,
            amount: sale.amount,
        }
    }
}

/// Errors raised by the remote sales lookup. None of them are retried.
#[derive(Debug, Error)]
pub enum SalesClientError {
    /// Transport failure (connection refused, reset, ...).
    #[error("http error calling sales-service: {0}")]
    Http(#[source] reqwest::Error),

    /// The sale ledger answered with a non-2xx status.
    #[error("sales-service responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body was not a JSON array of sales.
    #[error("malformed response from sales-service: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the sale ledger's `GET /api/sale/client/{id}` endpoint.
#[derive(Debug, Clone)]
pub struct HttpSalesClient {
    base_url: String,
    http: Client,
}

impl HttpSalesClient {
    /// Create a client bound to `base_url`, e.g. [`DEFAULT_SALES_SERVICE_URL`].
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// URL of the client sales lookup for `client`.
    #[must_use]
    pub fn client_sales_url(&self, client: ClientId) -> String {
        format!("{}/api/sale/client/{client}", self.base_url)
    }
}

impl Default for HttpSalesClient {
    fn default() -> Self {
        Self::new(DEFAULT_SALES_SERVICE_URL)
    }
}

#[async_trait]
impl SalesClient for HttpSalesClient {
    async fn client_sales(&self, client: ClientId) -> Result<Vec<SaleDto>, SalesClientError> {
        let url = self.client_sales_url(client);

        debug!(%url, "fetching client sales");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(SalesClientError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                Err(read_error) => {
                    debug!(status, "failed to read sales-service error body: {read_error}");

                    String::new()
                }
            };

            return Err(SalesClientError::UnexpectedStatus { status, body });
        }

        response.json().await.map_err(SalesClientError::Decode)
    }
}

#[automock]
#[async_trait]
pub trait SalesClient: Send + Sync {
    /// Fetch every sale the sale ledger holds for `client`.
    async fn client_sales(&self, client: ClientId) -> Result<Vec<SaleDto>, SalesClientError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::{
        Response, Router, Server, conn::tcp::TcpAcceptor, handler, http::StatusCode, writing::Json,
    };
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    async fn spawn_sale_ledger(router: Router) -> TestResult<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let acceptor = TcpAcceptor::try_from(listener)?;

        tokio::spawn(async move {
            Server::new(acceptor).serve(router).await;
        });

        Ok(format!("http://{addr}"))
    }

    #[handler]
    async fn unavailable(res: &mut Response) {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        res.render("ledger down");
    }

    #[handler]
    async fn iso_dated_sales(res: &mut Response) {
        res.render(Json(json!([{ "operationDate": "2024-01-05" }])));
    }

    fn make_sale() -> SaleDto {
        SaleDto {
            id: SaleId::from_i64(3),
            product_code: "P1".to_string(),
            client_id: ClientId::from_i64(1),
            operation_date: date(2024, 1, 1),
            quantity: 5,
            amount: 99.99,
        }
    }

    #[test]
    fn sale_dto_uses_fixed_wire_names_and_date_format() -> TestResult {
        let value = serde_json::to_value(make_sale())?;

        assert_eq!(
            value,
            json!({
                "id": 3,
                "productCode": "P1",
                "clientId": 1,
                "operationDate": "01-01-2024",
                "quantity": 5,
                "amount": 99.99
            })
        );

        Ok(())
    }

    #[test]
    fn sale_dto_survives_json_round_trip() -> TestResult {
        let sale = make_sale();

        let decoded: SaleDto = serde_json::from_str(&serde_json::to_string(&sale)?)?;

        assert_eq!(decoded, sale);

        Ok(())
    }

    #[test]
    fn sale_dto_rejects_iso_operation_date() {
        let result = serde_json::from_value::<SaleDto>(json!({
            "id": 3,
            "productCode": "P1",
            "clientId": 1,
            "operationDate": "2024-01-01",
            "quantity": 5,
            "amount": 99.99
        }));

        assert!(result.is_err(), "ISO dates are not part of the wire format");
    }

    #[test]
    fn default_client_targets_fixed_sales_service_address() {
        let client = HttpSalesClient::default();

        assert_eq!(
            client.client_sales_url(ClientId::from_i64(1)),
            "http://localhost:9001/api/sale/client/1"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = HttpSalesClient::new("http://sales.internal:8080/");

        assert_eq!(
            client.client_sales_url(ClientId::from_i64(42)),
            "http://sales.internal:8080/api/sale/client/42"
        );
    }

    #[tokio::test]
    async fn connection_refused_surfaces_as_http_error() {
        // Port 9 (discard) is not expected to accept HTTP connections locally.
        let client = HttpSalesClient::new("http://127.0.0.1:9");

        let result = client.client_sales(ClientId::from_i64(1)).await;

        assert!(
            matches!(result, Err(SalesClientError::Http(_))),
            "expected Http error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn non_success_status_surfaces_with_status_and_body() -> TestResult {
        let base_url =
            spawn_sale_ledger(Router::with_path("api/sale/client/{id}").get(unavailable)).await?;

        let result = HttpSalesClient::new(base_url)
            .client_sales(ClientId::from_i64(1))
            .await;

        assert!(
            matches!(
                &result,
                Err(SalesClientError::UnexpectedStatus { status: 503, body }) if body == "ledger down"
            ),
            "expected 503 with the ledger's body, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_sales_body_surfaces_as_decode_error() -> TestResult {
        let base_url =
            spawn_sale_ledger(Router::with_path("api/sale/client/{id}").get(iso_dated_sales))
                .await?;

        let result = HttpSalesClient::new(base_url)
            .client_sales(ClientId::from_i64(1))
            .await;

        assert!(
            matches!(result, Err(SalesClientError::Decode(_))),
            "expected Decode error, got {result:?}"
        );

        Ok(())
    }
}
