//! Room endpoints

use super::LagoaApi;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{Room, RoomStatus};
use shared::request::RoomStatusUpdate;
use shared::ApiResponse;

impl<C: HttpClient> LagoaApi<C> {
    /// Fetch the full room grid.
    pub async fn list_rooms(&self) -> ClientResult<Vec<Room>> {
        let resp: ApiResponse<Vec<Room>> = self.transport().get("api/rooms").await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// Request a room status transition from the authoritative registry.
    ///
    /// Callers re-fetch the grid afterwards instead of trusting the returned
    /// record alone; other terminals may have moved neighboring rooms.
    pub async fn update_room_status(
        &self,
        room_id: i64,
        status: RoomStatus,
    ) -> ClientResult<Room> {
        let body = RoomStatusUpdate { status };
        let resp: ApiResponse<Room> = self
            .transport()
            .patch(&format!("api/rooms/{room_id}/status"), &body)
            .await?;
        resp.into_result().map_err(ClientError::Api)
    }
}
