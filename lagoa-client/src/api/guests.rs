//! Guest endpoints

use super::LagoaApi;
use crate::{ClientError, ClientResult, HttpClient};
use shared::error::{AppError, ErrorCode};
use shared::models::{Guest, GuestCheckIn, SettlementMethod};
use shared::request::CheckoutRequest;
use shared::ApiResponse;

impl<C: HttpClient> LagoaApi<C> {
    /// Resolve the guest bound to a wristband UID.
    pub async fn find_guest_by_wristband(&self, uid: &str) -> ClientResult<Guest> {
        let resp: ApiResponse<Guest> = self
            .transport()
            .get(&format!("api/guests/wristband/{uid}"))
            .await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// List every active guest.
    ///
    /// The backend exposes no per-room or per-name lookup; resolution happens
    /// client-side over the active list, which doubles as revalidation.
    pub async fn active_guests(&self) -> ClientResult<Vec<Guest>> {
        let resp: ApiResponse<Vec<Guest>> = self.transport().get("api/guests?active=true").await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// Resolve the single active guest billed to a room number.
    ///
    /// Zero matches is a lookup miss; more than one active guest on the same
    /// room is reported as ambiguous and left to the caller to disambiguate.
    pub async fn find_guest_by_room(&self, room_number: &str) -> ClientResult<Guest> {
        let guests = self.active_guests().await?;
        let mut matches = guests
            .into_iter()
            .filter(|g| g.active && g.room.as_deref() == Some(room_number));

        let first = matches.next().ok_or_else(|| {
            ClientError::Api(AppError::with_message(
                ErrorCode::GuestNotFound,
                format!("No active guest for room {room_number}"),
            ))
        })?;
        if matches.next().is_some() {
            return Err(ClientError::Api(
                AppError::with_message(
                    ErrorCode::GuestAmbiguous,
                    format!("Room {room_number} has more than one active guest"),
                )
                .with_detail("room", room_number),
            ));
        }
        Ok(first)
    }

    /// Case-insensitive substring search over active guests.
    pub async fn search_guests_by_name(&self, fragment: &str) -> ClientResult<Vec<Guest>> {
        let needle = fragment.trim().to_lowercase();
        let guests = self.active_guests().await?;
        Ok(guests
            .into_iter()
            .filter(|g| g.active && g.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Every active guest occupying a room, by room id (checkout flows).
    pub async fn guests_by_room_id(&self, room_id: i64) -> ClientResult<Vec<Guest>> {
        let resp: ApiResponse<Vec<Guest>> = self
            .transport()
            .get(&format!("api/guests?roomId={room_id}&active=true"))
            .await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// Create a guest (check-in).
    pub async fn check_in(&self, payload: &GuestCheckIn) -> ClientResult<Guest> {
        let resp: ApiResponse<Guest> = self.transport().post("api/guests", payload).await?;
        resp.into_result().map_err(ClientError::Api)
    }

    /// Close a guest's account with the chosen settlement method.
    ///
    /// The server deactivates the guest and moves their room to CLEANING;
    /// the returned record reflects the deactivation.
    pub async fn checkout_guest(
        &self,
        guest_id: i64,
        settlement_method: SettlementMethod,
    ) -> ClientResult<Guest> {
        let body = CheckoutRequest { settlement_method };
        let resp: ApiResponse<Guest> = self
            .transport()
            .patch(&format!("api/guests/{guest_id}/checkout"), &body)
            .await?;
        resp.into_result().map_err(ClientError::Api)
    }
}
