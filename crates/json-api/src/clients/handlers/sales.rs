//! Client Sales Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use crm_app::domain::clients::records::ClientId;

use crate::{extensions::*, sales::SalePayload, state::ClientsState};

/// Client Sales Handler
///
/// Fetches the client's sales from the sale ledger service. Any failure of the
/// remote call answers 500; nothing is retried.
#[endpoint(
    tags("clients"),
    summary = "List Sales Of Client",
    responses(
        (status_code = StatusCode::OK, description = "Sales of the client"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Sale ledger unavailable"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Vec<SalePayload>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<ClientsState>>()?;
    let client = ClientId::from_i64(id.into_inner());

    info!(%client, "fetching sales of a client");

    let sales = state
        .app
        .sales
        .client_sales(client)
        .await
        .or_500("failed to fetch client sales")?;

    Ok(Json(sales.into_iter().map(Into::into).collect()))
}
