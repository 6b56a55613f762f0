//! HTTP server bootstrap shared by both services.

use salvo::{
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
};
use thiserror::Error;
use tracing::{error, info};

use crate::shutdown;

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/api-doc/openapi.json";

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: salvo::Error,
    },
}

/// Attach the OpenAPI document and Swagger UI to `router`.
#[must_use]
pub fn with_api_docs(router: Router, title: &str) -> Router {
    let doc = OpenApi::new(title, env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}

/// Serve `router` on `addr` until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error when the address cannot be bound.
pub async fn serve(
    router: Router,
    addr: &str,
    title: &str,
    service: &'static str,
) -> Result<(), ServeError> {
    let router = with_api_docs(router, title);

    let listener = TcpListener::new(addr.to_string())
        .try_bind()
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!(service, "listening on {addr}");

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, service).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;

    info!(service, "server stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crm_app::{context::SaleLedgerContext, domain::sales::MockSalesService};

    use crate::router::sale_service_router;

    use super::*;

    #[tokio::test]
    async fn openapi_document_lists_sale_routes() -> TestResult {
        let router = with_api_docs(
            sale_service_router(SaleLedgerContext {
                sales: Arc::new(MockSalesService::new()),
            }),
            "Sale Ledger API",
        );

        let doc: serde_json::Value = TestClient::get(format!("http://example.com{OPENAPI_PATH}"))
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        let paths = doc
            .get("paths")
            .and_then(serde_json::Value::as_object)
            .ok_or("openapi document should have paths")?;

        assert!(paths.contains_key("/api/sale"), "paths: {paths:?}");
        assert!(paths.contains_key("/api/sale/client/{id}"), "paths: {paths:?}");
        assert!(paths.contains_key("/healthcheck"), "paths: {paths:?}");

        Ok(())
    }
}
