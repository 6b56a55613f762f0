//! Delete Client Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use crm_app::domain::clients::records::ClientId;

use crate::{clients::errors::into_status_error, extensions::*, state::ClientsState};

/// Delete Client Handler
///
/// Deleting an unknown id is not an error.
#[endpoint(
    tags("clients"),
    summary = "Delete Client",
    responses(
        (status_code = StatusCode::OK, description = "Client deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<ClientsState>>()?;
    let id = ClientId::from_i64(id.into_inner());

    info!(%id, "deleting a client");

    state
        .app
        .clients
        .delete_client(id)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crm_app::domain::clients::{ClientsServiceError, MockClientsService};

    use crate::test_helpers::clients_service;

    use super::*;

    fn make_service(clients: MockClientsService) -> Service {
        clients_service(clients, Router::with_path("api/client/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_client_returns_200() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_delete_client()
            .once()
            .withf(|id| *id == ClientId::from_i64(7))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/api/client/7")
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_invalid_id_returns_400() -> TestResult {
        let mut clients = MockClientsService::new();

        clients.expect_delete_client().never();

        let res = TestClient::delete("http://example.com/api/client/seven")
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_storage_error_returns_500() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_delete_client()
            .once()
            .return_once(|_| Err(ClientsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::delete("http://example.com/api/client/7")
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
