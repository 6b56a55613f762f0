//! Client Directory

mod errors;
mod handlers;
mod payloads;

pub(crate) use handlers::*;
pub use payloads::{ClientPayload, NewClientPayload};
