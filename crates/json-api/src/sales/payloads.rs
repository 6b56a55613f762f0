//! Sale JSON payloads.
//!
//! `operationDate` travels as `dd-MM-yyyy` in both directions.

use jiff::civil::Date;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use crm_app::domain::{
    clients::records::ClientId,
    sales::{
        SaleDto,
        data::NewSale,
        records::{SaleId, SaleRecord},
    },
};

/// Sale without an id, as accepted on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSalePayload {
    pub product_code: String,
    pub client_id: i64,
    #[serde(with = "crm_app::domain::sales::date_format")]
    #[salvo(schema(value_type = String, example = "01-01-2024"))]
    pub operation_date: Date,
    pub quantity: i64,
    pub amount: f64,
}

impl From<NewSalePayload> for NewSale {
    fn from(payload: NewSalePayload) -> Self {
        NewSale {
            product_code: payload.product_code,
            client_id: ClientId::from_i64(payload.client_id),
            operation_date: payload.operation_date,
            quantity: payload.quantity,
            amount: payload.amount,
        }
    }
}

/// Stored sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalePayload {
    /// Store-assigned identifier
    pub id: i64,
    pub product_code: String,
    /// Owning client; not checked against the client directory
    pub client_id: i64,
    #[serde(with = "crm_app::domain::sales::date_format")]
    #[salvo(schema(value_type = String, example = "01-01-2024"))]
    pub operation_date: Date,
    pub quantity: i64,
    pub amount: f64,
}

impl From<SaleRecord> for SalePayload {
    fn from(sale: SaleRecord) -> Self {
        SalePayload {
            id: sale.id.into_i64(),
            product_code: sale.product_code,
            client_id: sale.client_id.into_i64(),
            operation_date: sale.operation_date,
            quantity: sale.quantity,
            amount: sale.amount,
        }
    }
}

impl From<SaleDto> for SalePayload {
    fn from(sale: SaleDto) -> Self {
        SalePayload {
            id: sale.id.into_i64(),
            product_code: sale.product_code,
            client_id: sale.client_id.into_i64(),
            operation_date: sale.operation_date,
            quantity: sale.quantity,
            amount: sale.amount,
        }
    }
}

impl From<SalePayload> for SaleRecord {
    fn from(payload: SalePayload) -> Self {
        SaleRecord {
            id: SaleId::from_i64(payload.id),
            product_code: payload.product_code,
            client_id: ClientId::from_i64(payload.client_id),
            operation_date: payload.operation_date,
            quantity: payload.quantity,
            amount: payload.amount,
        }
    }
}
