//! Client Errors

use salvo::http::StatusError;
use tracing::error;

use crm_app::domain::clients::ClientsServiceError;

pub(crate) fn into_status_error(error: ClientsServiceError) -> StatusError {
    match error {
        ClientsServiceError::Sql(source) => {
            error!("client directory storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
