//! Create Sale Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    sales::{NewSalePayload, SalePayload, errors::into_status_error},
    state::SalesState,
};

/// Create Sale Handler
///
/// The referenced client is not checked.
#[endpoint(
    tags("sales"),
    summary = "Create Sale",
    responses(
        (status_code = StatusCode::CREATED, description = "Sale created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<NewSalePayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SalePayload>, StatusError> {
    let state = depot.obtain_or_500::<Arc<SalesState>>()?;
    let payload = json.into_inner();

    info!(client_id = payload.client_id, "creating a sale");

    let sale = state
        .app
        .sales
        .create_sale(payload.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/sale/{}", sale.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(sale.into()))
}
