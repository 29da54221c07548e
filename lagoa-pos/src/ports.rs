//! Port traits between the core and the remote service
//!
//! The orchestrators are generic over these traits; production wires them to
//! the HTTP client (see [`backend`](crate::backend)), tests to an in-memory
//! fake. Every call here is a revalidation call — results are wrapped in
//! [`Snapshot`](crate::Snapshot)s by the callers and discarded after one
//! decision.

use crate::error::PosResult;
use async_trait::async_trait;
use shared::models::{
    Guest, GuestCheckIn, OrderRecord, Product, Room, RoomStatus, SettlementMethod, Staff,
};
use shared::request::{OrderBatchRequest, OrderListQuery};

/// Guest resolution
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    async fn by_wristband(&self, uid: &str) -> PosResult<Guest>;
    /// The single active guest billed to a room number. Zero matches is a
    /// miss; more than one is reported as ambiguous for the caller to settle.
    async fn by_room(&self, room_number: &str) -> PosResult<Guest>;
    /// Case-insensitive substring match over active guests.
    async fn by_name(&self, fragment: &str) -> PosResult<Vec<Guest>>;
    /// All active occupants of a room, for checkout disambiguation.
    async fn all_by_room(&self, room_id: i64) -> PosResult<Vec<Guest>>;
}

/// Product stock
#[async_trait]
pub trait StockCatalog: Send + Sync {
    /// Items eligible for new cart additions.
    async fn list_visible(&self) -> PosResult<Vec<Product>>;
    /// Unfiltered list with live stock, fetched immediately before commit.
    async fn refresh(&self) -> PosResult<Vec<Product>>;
}

/// Order submission and history
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit all lines as one atomic request.
    async fn submit_batch(&self, request: &OrderBatchRequest) -> PosResult<Vec<OrderRecord>>;
    async fn list_orders(&self, query: &OrderListQuery) -> PosResult<Vec<OrderRecord>>;
    /// Cancel one line; always carries a manager PIN.
    async fn cancel_order(&self, order_id: i64, manager_pin: &str) -> PosResult<OrderRecord>;
}

/// Guest account lifecycle (check-in / checkout)
#[async_trait]
pub trait GuestLifecycle: Send + Sync {
    async fn check_in(&self, payload: &GuestCheckIn) -> PosResult<Guest>;
    async fn checkout(&self, guest_id: i64, method: SettlementMethod) -> PosResult<Guest>;
}

/// Room registry
#[async_trait]
pub trait RoomGateway: Send + Sync {
    async fn list_rooms(&self) -> PosResult<Vec<Room>>;
    async fn update_status(&self, room_id: i64, status: RoomStatus) -> PosResult<Room>;
}

/// Staff authentication
#[async_trait]
pub trait StaffGateway: Send + Sync {
    async fn authenticate(&self, pin: &str) -> PosResult<Staff>;
}
