//! Sale Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    extensions::*,
    sales::{SalePayload, errors::into_status_error},
    state::SalesState,
};

/// Sale Index Handler
#[endpoint(
    tags("sales"),
    summary = "List Sales",
    responses(
        (status_code = StatusCode::OK, description = "All sales"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<SalePayload>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<SalesState>>()?;

    info!("returning all sales");

    let sales = state
        .app
        .sales
        .list_sales()
        .await
        .map_err(into_status_error)?;

    Ok(Json(sales.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crm_app::domain::sales::{MockSalesService, SalesServiceError};

    use crate::test_helpers::sales_service;

    use super::{super::tests::*, *};

    fn make_service(sales: MockSalesService) -> Service {
        sales_service(sales, Router::with_path("api/sale").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_every_sale() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_list_sales()
            .once()
            .return_once(|| Ok(vec![make_sale(1, 1), make_sale(2, 7)]));

        let mut res = TestClient::get("http://example.com/api/sale")
            .send(&make_service(sales))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!([sale_json(1, 1), sale_json(2, 7)]));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_list_sales()
            .once()
            .return_once(|| Err(SalesServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/api/sale")
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
