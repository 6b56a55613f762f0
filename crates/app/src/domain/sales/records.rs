//! Sale Records

use jiff::civil::Date;

use crate::{domain::clients::records::ClientId, ids::TypedId};

/// Sale Id
pub type SaleId = TypedId<SaleRecord>;

/// Sale Record
///
/// `client_id` is a plain reference; nothing checks that the client exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub id: SaleId,
    pub product_code: String,
    pub client_id: ClientId,
    pub operation_date: Date,
    pub quantity: i64,
    pub amount: f64,
}
