//! Client Records

use crate::ids::TypedId;

/// Client Id
pub type ClientId = TypedId<ClientRecord>;

/// Client Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
}
