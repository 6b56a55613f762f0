//! Sales By Client Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use crm_app::domain::clients::records::ClientId;

use crate::{
    extensions::*,
    sales::{SalePayload, errors::into_status_error},
    state::SalesState,
};

/// Sales By Client Handler
///
/// Returns every sale referencing the client; empty when there are none.
/// This is the endpoint the client directory calls for its sales lookup.
#[endpoint(
    tags("sales"),
    summary = "List Sales By Client",
    responses(
        (status_code = StatusCode::OK, description = "Sales of the client"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Vec<SalePayload>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<SalesState>>()?;
    let client = ClientId::from_i64(id.into_inner());

    info!(%client, "returning sales of a client");

    let sales = state
        .app
        .sales
        .list_sales_by_client(client)
        .await
        .map_err(into_status_error)?;

    Ok(Json(sales.into_iter().map(Into::into).collect()))
}
