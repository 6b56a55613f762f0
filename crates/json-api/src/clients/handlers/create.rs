//! Create Client Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    clients::{ClientPayload, NewClientPayload, errors::into_status_error},
    extensions::*,
    state::ClientsState,
};

/// Create Client Handler
#[endpoint(
    tags("clients"),
    summary = "Create Client",
    responses(
        (status_code = StatusCode::CREATED, description = "Client created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<NewClientPayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClientPayload>, StatusError> {
    let state = depot.obtain_or_500::<Arc<ClientsState>>()?;

    info!("creating a client");

    let client = state
        .app
        .clients
        .create_client(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/client/{}", client.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(client.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crm_app::domain::clients::{
        ClientsServiceError, MockClientsService, data::NewClient, records::ClientId,
    };

    use crate::test_helpers::clients_service;

    use super::{super::tests::*, *};

    fn make_service(clients: MockClientsService) -> Service {
        clients_service(clients, Router::with_path("api/client").post(handler))
    }

    fn request_body() -> serde_json::Value {
        json!({
            "firstName": "Test1",
            "lastName": "Test1",
            "email": "test1@test.ma",
            "address": "Casablanca"
        })
    }

    #[tokio::test]
    async fn test_create_client_returns_201_with_assigned_id() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_create_client()
            .once()
            .withf(|new| {
                *new == NewClient {
                    first_name: "Test1".to_string(),
                    last_name: "Test1".to_string(),
                    email: "test1@test.ma".to_string(),
                    address: "Casablanca".to_string(),
                }
            })
            .return_once(|new| Ok(new.with_id(ClientId::from_i64(1))));

        clients.expect_get_client().never();
        clients.expect_list_clients().never();
        clients.expect_update_client().never();
        clients.expect_delete_client().never();

        let mut res = TestClient::post("http://example.com/api/client")
            .json(&request_body())
            .send(&make_service(clients))
            .await;

        let body: ClientPayload = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/client/1"));
        assert_eq!(body, make_client(1).into());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_malformed_body_returns_400() -> TestResult {
        let mut clients = MockClientsService::new();

        clients.expect_create_client().never();

        let res = TestClient::post("http://example.com/api/client")
            .json(&json!({ "firstName": 12 }))
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_storage_error_returns_500() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_create_client()
            .once()
            .return_once(|_| Err(ClientsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::post("http://example.com/api/client")
            .json(&request_body())
            .send(&make_service(clients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
