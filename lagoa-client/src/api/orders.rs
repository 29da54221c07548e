//! Order endpoints

use super::LagoaApi;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::OrderRecord;
use shared::request::{CancelOrderRequest, OrderBatchRequest, OrderListQuery};
use shared::ApiResponse;

impl<C: HttpClient> LagoaApi<C> {
    /// Submit a whole order as one atomic batch.
    ///
    /// Carries the staff PIN header for attribution. On any rejection the
    /// server persists nothing, so a retry after a failure cannot double-charge.
    pub async fn submit_order_batch(
        &self,
        request: &OrderBatchRequest,
    ) -> ClientResult<Vec<OrderRecord>> {
        let resp: ApiResponse<Vec<OrderRecord>> =
            self.transport().post_attributed("api/orders", request).await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// List persisted order lines with optional filters.
    pub async fn list_orders(&self, query: &OrderListQuery) -> ClientResult<Vec<OrderRecord>> {
        let mut params = Vec::new();
        if let Some(status) = query.status {
            params.push(format!("status={}", status.as_str()));
        }
        if let Some(guest_id) = query.guest_id {
            params.push(format!("guestId={guest_id}"));
        }
        if let Some(staff_id) = query.staff_id {
            params.push(format!("staffId={staff_id}"));
        }
        if let Some(recent) = query.recent {
            params.push(format!("recent={recent}"));
        }
        if let Some(page) = query.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = query.limit {
            params.push(format!("limit={limit}"));
        }
        let path = if params.is_empty() {
            "api/orders".to_string()
        } else {
            format!("api/orders?{}", params.join("&"))
        };
        let resp: ApiResponse<Vec<OrderRecord>> = self.transport().get(&path).await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// A guest's order history (checkout supporting detail, statements).
    pub async fn orders_for_guest(&self, guest_id: i64) -> ClientResult<Vec<OrderRecord>> {
        self.list_orders(&OrderListQuery::for_guest(guest_id)).await
    }

    /// Cancel one order line. Always requires a manager PIN.
    pub async fn cancel_order(
        &self,
        order_id: i64,
        manager_pin: &str,
    ) -> ClientResult<OrderRecord> {
        let body = CancelOrderRequest {
            manager_pin: manager_pin.to_string(),
        };
        let resp: ApiResponse<OrderRecord> = self
            .transport()
            .delete_with_body(&format!("api/orders/{order_id}"), &body)
            .await?;
        resp.into_result().map_err(ClientError::Api)
    }
}
