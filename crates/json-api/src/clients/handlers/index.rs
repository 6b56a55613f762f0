//! Client Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    clients::{ClientPayload, errors::into_status_error},
    extensions::*,
    state::ClientsState,
};

/// Client Index Handler
///
/// Returns every client. Requires a bearer token holding the `user` role.
#[endpoint(
    tags("clients"),
    summary = "List Clients",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "All clients"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Token lacks the user role"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ClientPayload>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<ClientsState>>()?;

    info!("returning all clients");

    let clients = state
        .app
        .clients
        .list_clients()
        .await
        .map_err(into_status_error)?;

    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use crm_app::{
        auth::{AuthServiceError, MockAuthService, Principal, USER_ROLE},
        domain::clients::{ClientsServiceError, MockClientsService},
    };

    use crate::{
        auth,
        test_helpers::{ClientMocks, clients_service_with},
    };

    use super::{super::tests::*, *};

    const TOKEN: &str = "ct_v1_token.secret";

    fn make_service(clients: MockClientsService, auth: MockAuthService) -> Service {
        clients_service_with(
            ClientMocks {
                clients,
                auth,
                ..ClientMocks::default()
            },
            Router::with_path("api/client")
                .hoop(auth::middleware::handler)
                .hoop(auth::require_user)
                .get(handler),
        )
    }

    fn auth_granting(roles: &[&str]) -> MockAuthService {
        let roles: Vec<String> = roles.iter().map(ToString::to_string).collect();
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == TOKEN)
            .return_once(move |_| {
                Ok(Principal {
                    token_uuid: Uuid::nil(),
                    roles,
                })
            });

        auth
    }

    #[tokio::test]
    async fn test_index_with_user_role_returns_clients() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_list_clients()
            .once()
            .return_once(|| Ok(vec![make_client(1), make_client(2)]));

        let mut res = TestClient::get("http://example.com/api/client")
            .add_header(AUTHORIZATION, format!("Bearer {TOKEN}"), true)
            .send(&make_service(clients, auth_granting(&[USER_ROLE])))
            .await;

        let body: Vec<ClientPayload> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|client| client.id).collect::<Vec<_>>(),
            vec![1, 2]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_no_clients_returns_empty_array() -> TestResult {
        let mut clients = MockClientsService::new();

        clients.expect_list_clients().once().return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/api/client")
            .add_header(AUTHORIZATION, format!("Bearer {TOKEN}"), true)
            .send(&make_service(clients, auth_granting(&[USER_ROLE])))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "[]");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_token_returns_401_and_never_lists() -> TestResult {
        let mut clients = MockClientsService::new();
        let mut auth = MockAuthService::new();

        clients.expect_list_clients().never();
        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com/api/client")
            .send(&make_service(clients, auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_unknown_token_returns_401_and_never_lists() -> TestResult {
        let mut clients = MockClientsService::new();
        let mut auth = MockAuthService::new();

        clients.expect_list_clients().never();
        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::get("http://example.com/api/client")
            .add_header(AUTHORIZATION, format!("Bearer {TOKEN}"), true)
            .send(&make_service(clients, auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_user_role_returns_403_and_never_lists() -> TestResult {
        let mut clients = MockClientsService::new();

        clients.expect_list_clients().never();

        let res = TestClient::get("http://example.com/api/client")
            .add_header(AUTHORIZATION, format!("Bearer {TOKEN}"), true)
            .send(&make_service(clients, auth_granting(&["admin"])))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut clients = MockClientsService::new();

        clients
            .expect_list_clients()
            .once()
            .return_once(|| Err(ClientsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/api/client")
            .add_header(AUTHORIZATION, format!("Bearer {TOKEN}"), true)
            .send(&make_service(clients, auth_granting(&[USER_ROLE])))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
