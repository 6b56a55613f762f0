//! Update Client Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::{debug, info};

use crate::{
    clients::{ClientPayload, errors::into_status_error},
    extensions::*,
    state::ClientsState,
};

/// Update Client Handler
///
/// Overwrites the client carrying the body's id and echoes the body back.
/// An unknown id leaves the store untouched and still answers 200.
#[endpoint(
    tags("clients"),
    summary = "Update Client",
    responses(
        (status_code = StatusCode::OK, description = "Request body echoed back"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ClientPayload>,
    depot: &mut Depot,
) -> Result<Json<ClientPayload>, StatusError> {
    let state = depot.obtain_or_500::<Arc<ClientsState>>()?;
    let payload = json.into_inner();

    info!(id = payload.id, "updating a client");

    let updated = state
        .app
        .clients
        .update_client(payload.clone().into())
        .await
        .map_err(into_status_error)?;

    if updated.is_none() {
        debug!(id = payload.id, "no client to update");
    }

    Ok(Json(payload))
}
