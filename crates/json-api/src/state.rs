//! State

use std::sync::Arc;

use crm_app::context::{ClientDirectoryContext, SaleLedgerContext};

/// Shared state of the client directory routes.
#[derive(Clone)]
pub(crate) struct ClientsState {
    pub(crate) app: ClientDirectoryContext,
}

impl ClientsState {
    #[must_use]
    pub(crate) fn new(app: ClientDirectoryContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: ClientDirectoryContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}

/// Shared state of the sale ledger routes.
#[derive(Clone)]
pub(crate) struct SalesState {
    pub(crate) app: SaleLedgerContext,
}

impl SalesState {
    #[must_use]
    pub(crate) fn new(app: SaleLedgerContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: SaleLedgerContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
