//! Sales

pub mod data;
pub mod date_format;
pub mod errors;
pub mod records;
pub mod remote;
mod repository;
pub mod service;

pub use errors::SalesServiceError;
pub use remote::{
    DEFAULT_SALES_SERVICE_URL, HttpSalesClient, MockSalesClient, SALES_SERVICE_NAME, SaleDto,
    SalesClient, SalesClientError,
};
pub use service::*;
