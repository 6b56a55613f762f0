//! Service Routers

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crm_app::context::{ClientDirectoryContext, SaleLedgerContext};

use crate::{
    auth, clients, healthcheck,
    observability::request_logging,
    sales,
    state::{ClientsState, SalesState},
};

/// Full router of the client directory service.
pub fn client_service_router(app: ClientDirectoryContext) -> Router {
    base_router()
        .hoop(inject(ClientsState::from_app_context(app)))
        .push(client_routes())
}

/// Full router of the sale ledger service.
pub fn sale_service_router(app: SaleLedgerContext) -> Router {
    base_router()
        .hoop(inject(SalesState::from_app_context(app)))
        .push(sale_routes())
}

fn base_router() -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
}

/// `/api/client` routes. Only the full listing sits behind authentication.
pub(crate) fn client_routes() -> Router {
    Router::with_path("api/client")
        .post(clients::create::handler)
        .put(clients::update::handler)
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .hoop(auth::require_user)
                .get(clients::index::handler),
        )
        .push(
            Router::with_path("{id}")
                .get(clients::get::handler)
                .delete(clients::delete::handler)
                .push(Router::with_path("sales").get(clients::sales::handler)),
        )
}

/// `/api/sale` routes.
pub(crate) fn sale_routes() -> Router {
    Router::with_path("api/sale")
        .get(sales::index::handler)
        .post(sales::create::handler)
        .put(sales::update::handler)
        .push(Router::with_path("client/{id}").get(sales::by_client::handler))
        .push(
            Router::with_path("{id}")
                .get(sales::get::handler)
                .delete(sales::delete::handler),
        )
}
