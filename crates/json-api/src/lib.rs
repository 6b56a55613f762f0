//! JSON HTTP front ends for the client directory and sale ledger services.

mod auth;
mod clients;
pub mod config;
mod extensions;
mod healthcheck;
pub mod observability;
pub mod router;
mod sales;
pub mod server;
pub mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

pub use clients::{ClientPayload, NewClientPayload};
pub use healthcheck::HealthResponse;
pub use sales::{NewSalePayload, SalePayload};

/// OpenAPI title of the client directory service.
pub const CLIENT_SERVICE_TITLE: &str = "Client Directory API";

/// OpenAPI title of the sale ledger service.
pub const SALE_SERVICE_TITLE: &str = "Sale Ledger API";
