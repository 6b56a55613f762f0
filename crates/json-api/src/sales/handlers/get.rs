//! Get Sale Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crm_app::domain::sales::records::SaleId;

use crate::{
    extensions::*,
    sales::{SalePayload, errors::into_status_error},
    state::SalesState,
};

/// Get Sale Handler
///
/// Returns the sale, or `null` when no sale has this id.
#[endpoint(
    tags("sales"),
    summary = "Get Sale",
    responses(
        (status_code = StatusCode::OK, description = "Sale or null"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Option<SalePayload>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<SalesState>>()?;

    let sale = state
        .app
        .sales
        .get_sale(SaleId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(sale.map(Into::into)))
}
