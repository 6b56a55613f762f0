//! Delete Sale Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crm_app::domain::sales::records::SaleId;

use crate::{extensions::*, sales::errors::into_status_error, state::SalesState};

/// Delete Sale Handler
#[endpoint(
    tags("sales"),
    summary = "Delete Sale",
    responses(
        (status_code = StatusCode::OK, description = "Sale deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<SalesState>>()?;

    state
        .app
        .sales
        .delete_sale(SaleId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
