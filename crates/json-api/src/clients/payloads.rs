//! Client JSON payloads.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use crm_app::domain::clients::{
    data::NewClient,
    records::{ClientId, ClientRecord},
};

/// Client without an id, as accepted on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClientPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
}

impl From<NewClientPayload> for NewClient {
    fn from(payload: NewClientPayload) -> Self {
        NewClient {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            address: payload.address,
        }
    }
}

/// Stored client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    /// Store-assigned identifier
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
}

impl From<ClientRecord> for ClientPayload {
    fn from(client: ClientRecord) -> Self {
        ClientPayload {
            id: client.id.into_i64(),
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            address: client.address,
        }
    }
}

impl From<ClientPayload> for ClientRecord {
    fn from(payload: ClientPayload) -> Self {
        ClientRecord {
            id: ClientId::from_i64(payload.id),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            address: payload.address,
        }
    }
}
