//! Sales Data

use jiff::civil::Date;

use crate::domain::{
    clients::records::ClientId,
    sales::records::{SaleId, SaleRecord},
};

/// New Sale Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub product_code: String,
    pub client_id: ClientId,
    pub operation_date: Date,
    pub quantity: i64,
    pub amount: f64,
}

impl NewSale {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: SaleId) -> SaleRecord {
        SaleRecord {
            id,
            product_code: self.product_code,
            client_id: self.client_id,
            operation_date: self.operation_date,
            quantity: self.quantity,
            amount: self.amount,
        }
    }
}
