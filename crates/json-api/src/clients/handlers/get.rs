//! Get Client Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use crm_app::domain::clients::records::ClientId;

use crate::{
    clients::{ClientPayload, errors::into_status_error},
    extensions::*,
    state::ClientsState,
};

/// Get Client Handler
///
/// Returns the client, or `null` when no client has this id.
#[endpoint(
    tags("clients"),
    summary = "Get Client",
    responses(
        (status_code = StatusCode::OK, description = "Client or null"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<ClientPayload>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<ClientsState>>()?;
    let id = ClientId::from_i64(id.into_inner());

    info!(%id, "returning a single client");

    let client = state
        .app
        .clients
        .get_client(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(client.map(Into::into)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crm_app::domain::clients::{ClientsServiceError, MockClientsService};

    use crate::test_helpers::clients_service;

    use super::{super::tests::*, *};

    fn make_service(clients: MockClientsService) -> Service {
        clients_service(clients, Router::with_path("api/client/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_existing_client_returns_200() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_get_client()
            .once()
            .withf(|id| *id == ClientId::from_i64(1))
            .return_once(|_| Ok(Some(make_client(1))));

        let mut res = TestClient::get("http://example.com/api/client/1")
            .send(&make_service(clients))
            .await;

        let body: Option<ClientPayload> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, Some(make_client(1).into()));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_client_returns_200_with_null() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_get_client()
            .once()
            .withf(|id| *id == ClientId::from_i64(999))
            .return_once(|_| Ok(None));

        let mut res = TestClient::get("http://example.com/api/client/999")
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "null");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let mut clients = MockClientsService::new();

        clients.expect_get_client().never();

        let res = TestClient::get("http://example.com/api/client/abc")
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_storage_error_returns_500() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_get_client()
            .once()
            .return_once(|_| Err(ClientsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/api/client/1")
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
