//! Product endpoints

use super::LagoaApi;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::Product;
use shared::ApiResponse;

impl<C: HttpClient> LagoaApi<C> {
    /// Products eligible for new cart additions, optionally per category.
    pub async fn list_visible_products(
        &self,
        category: Option<&str>,
    ) -> ClientResult<Vec<Product>> {
        let path = match category {
            Some(c) => format!("api/products?visibleOnly=true&category={c}"),
            None => "api/products?visibleOnly=true".to_string(),
        };
        let resp: ApiResponse<Vec<Product>> = self.transport().get(&path).await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// Unfiltered product list with live stock, used for revalidation.
    ///
    /// Delisted products are included so lines queued before a delisting can
    /// still be checked against live stock.
    pub async fn refresh_products(&self) -> ClientResult<Vec<Product>> {
        let resp: ApiResponse<Vec<Product>> = self.transport().get("api/products").await?;
        resp.into_result().map_err(ClientError::Api)
    }
}
