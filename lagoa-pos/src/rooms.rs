//! Room registry
//!
//! Client-side face of the authoritative room registry. Transition requests
//! are checked against the state machine locally (an illegal request never
//! leaves the terminal), sent to the server, and followed by a grid re-fetch
//! — several terminals watch the same rooms, so the local copy is never
//! mutated optimistically.

use crate::error::{PosError, PosResult};
use crate::ports::RoomGateway;
use crate::snapshot::Snapshot;
use shared::models::{Room, RoomOccupant, RoomStatus};

/// Room grid coordinator
#[derive(Debug, Clone)]
pub struct RoomRegistry<B> {
    backend: B,
}

impl<B: RoomGateway> RoomRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch the current grid.
    pub async fn grid(&self) -> PosResult<Vec<Room>> {
        self.backend.list_rooms().await
    }

    /// Housekeeping confirmed the room is clean: CLEANING → FREE.
    pub async fn confirm_cleaning(&self, room: &Room) -> PosResult<Vec<Room>> {
        self.transition(room, RoomStatus::Free).await
    }

    /// Governance blocked the room: FREE → MAINTENANCE.
    pub async fn block_for_maintenance(&self, room: &Room) -> PosResult<Vec<Room>> {
        self.transition(room, RoomStatus::Maintenance).await
    }

    /// Maintenance finished: MAINTENANCE → FREE.
    pub async fn release_from_maintenance(&self, room: &Room) -> PosResult<Vec<Room>> {
        self.transition(room, RoomStatus::Free).await
    }

    /// Occupied rooms yield informational detail only, never an action.
    pub fn occupant_detail(room: &Room) -> Option<&RoomOccupant> {
        match room.status {
            RoomStatus::Occupied => room.occupant.as_ref(),
            _ => None,
        }
    }

    /// Re-fetch a room and hand it out for check-in; only FREE rooms qualify.
    pub async fn select_for_check_in(&self, room_id: i64) -> PosResult<Snapshot<Room>> {
        let rooms = self.backend.list_rooms().await?;
        let room = rooms
            .into_iter()
            .find(|r| r.id == room_id)
            .ok_or_else(|| PosError::NotFound(format!("Room {room_id} not found")))?;
        if !room.status.is_selectable_for_check_in() {
            return Err(PosError::RoomState {
                from: room.status,
                to: RoomStatus::Occupied,
            });
        }
        Ok(Snapshot::now(room))
    }

    async fn transition(&self, room: &Room, target: RoomStatus) -> PosResult<Vec<Room>> {
        if !room.status.is_actionable() || !room.status.can_transition_to(target) {
            return Err(PosError::RoomState {
                from: room.status,
                to: target,
            });
        }
        tracing::info!(room = %room.number, from = ?room.status, to = ?target, "room transition");
        self.backend.update_status(room.id, target).await?;
        // Other terminals may have moved rooms meanwhile; trust the grid.
        self.backend.list_rooms().await
    }
}
