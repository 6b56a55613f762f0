//! Sale Ledger

mod errors;
mod handlers;
mod payloads;

pub(crate) use handlers::*;
pub use payloads::{NewSalePayload, SalePayload};
