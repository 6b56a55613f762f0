//! Test Helpers

use jiff::civil::date;

use crate::domain::{clients::data::NewClient, clients::records::ClientId, sales::data::NewSale};

/// Client with derived email and address, e.g. `Test1`.
pub(crate) fn new_client(name: &str) -> NewClient {
    let lower = name.to_lowercase();

    NewClient {
        first_name: name.to_string(),
        last_name: name.to_string(),
        email: format!("{lower}@test.ma"),
        address: format!("Address of {name}"),
    }
}

/// Sale of five units on 01-01-2024 for `client`.
pub(crate) fn new_sale(product_code: &str, client: ClientId) -> NewSale {
    NewSale {
        product_code: product_code.to_string(),
        client_id: client,
        operation_date: date(2024, 1, 1),
        quantity: 5,
        amount: 99.99,
    }
}
