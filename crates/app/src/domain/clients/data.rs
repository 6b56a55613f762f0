//! Clients Data

use crate::domain::clients::records::{ClientId, ClientRecord};

/// New Client Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
}

impl NewClient {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: ClientId) -> ClientRecord {
        ClientRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            address: self.address,
        }
    }
}
