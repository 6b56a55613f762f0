//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use crm_app::{
    auth::MockAuthService,
    context::{ClientDirectoryContext, SaleLedgerContext},
    domain::{
        clients::MockClientsService,
        sales::{MockSalesClient, MockSalesService},
    },
};

use crate::state::{ClientsState, SalesState};

/// Mocks behind the client directory state. Unset mocks reject every call.
#[derive(Default)]
pub(crate) struct ClientMocks {
    pub(crate) clients: MockClientsService,
    pub(crate) auth: MockAuthService,
    pub(crate) sales: MockSalesClient,
}

pub(crate) fn clients_state(mocks: ClientMocks) -> Arc<ClientsState> {
    ClientsState::from_app_context(ClientDirectoryContext {
        clients: Arc::new(mocks.clients),
        auth: Arc::new(mocks.auth),
        sales: Arc::new(mocks.sales),
    })
}

pub(crate) fn clients_state_with_auth(auth: MockAuthService) -> Arc<ClientsState> {
    clients_state(ClientMocks {
        auth,
        ..ClientMocks::default()
    })
}

pub(crate) fn clients_service_with(mocks: ClientMocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(clients_state(mocks))).push(route))
}

pub(crate) fn clients_service(clients: MockClientsService, route: Router) -> Service {
    clients_service_with(
        ClientMocks {
            clients,
            ..ClientMocks::default()
        },
        route,
    )
}

pub(crate) fn sales_state(sales: MockSalesService) -> Arc<SalesState> {
    SalesState::from_app_context(SaleLedgerContext {
        sales: Arc::new(sales),
    })
}

pub(crate) fn sales_service(sales: MockSalesService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(sales_state(sales))).push(route))
}
