//! Update Sale Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::{debug, info};

use crate::{
    extensions::*,
    sales::{SalePayload, errors::into_status_error},
    state::SalesState,
};

/// Update Sale Handler
///
/// Echoes the body back whether or not a sale with its id existed.
#[endpoint(
    tags("sales"),
    summary = "Update Sale",
    responses(
        (status_code = StatusCode::OK, description = "Request body echoed back"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SalePayload>,
    depot: &mut Depot,
) -> Result<Json<SalePayload>, StatusError> {
    let state = depot.obtain_or_500::<Arc<SalesState>>()?;
    let payload = json.into_inner();

    info!(id = payload.id, "updating a sale");

    if state
        .app
        .sales
        .update_sale(payload.clone().into())
        .await
        .map_err(into_status_error)?
        .is_none()
    {
        debug!(id = payload.id, "no sale to update");
    }

    Ok(Json(payload))
}
