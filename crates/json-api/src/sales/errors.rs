//! Sale Errors

use salvo::http::StatusError;
use tracing::error;

use crm_app::domain::sales::SalesServiceError;

pub(crate) fn into_status_error(error: SalesServiceError) -> StatusError {
    match error {
        SalesServiceError::Sql(source) => {
            error!("sale ledger storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
