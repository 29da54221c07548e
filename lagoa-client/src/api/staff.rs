//! Staff endpoints

use super::LagoaApi;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::Staff;
use shared::request::StaffAuthRequest;
use shared::ApiResponse;

impl<C: HttpClient> LagoaApi<C> {
    /// Authenticate a staff member by terminal PIN.
    pub async fn authenticate_staff(&self, pin: &str) -> ClientResult<Staff> {
        let body = StaffAuthRequest {
            pin: pin.to_string(),
        };
        let resp: ApiResponse<Staff> = self.transport().post("api/staff/auth", &body).await?;
        resp.into_result().map_err(ClientError::Api)
    }
}
