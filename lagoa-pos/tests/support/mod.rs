//! In-memory backend for integration tests
//!
//! Implements every port trait over shared mutable state, counts each
//! simulated network call, and mimics the server-side checks (active flag,
//! stock, spending limit) so the race-window scenarios can be replayed
//! deterministically.

// Not every test binary touches every fixture.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use lagoa_pos::error::{PosError, PosResult};
use lagoa_pos::ports::{
    GuestDirectory, GuestLifecycle, OrderGateway, RoomGateway, StaffGateway, StockCatalog,
};
use rust_decimal::Decimal;
use shared::models::{
    Guest, GuestCheckIn, GuestKind, OrderRecord, OrderStatus, Product, Role, Room, RoomStatus,
    SettlementMethod, Staff,
};
use shared::request::{OrderBatchRequest, OrderListQuery};
use std::sync::{Arc, Mutex};

/// Manager PIN the fake backend accepts
pub const MANAGER_PIN: &str = "5678";

/// Route orchestrator spans to the test writer (RUST_LOG controls verbosity).
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Default)]
pub struct BackendState {
    pub guests: Vec<Guest>,
    pub products: Vec<Product>,
    pub rooms: Vec<Room>,
    pub staff: Vec<Staff>,
    pub orders: Vec<OrderRecord>,
    pub next_order_id: i64,
    /// One entry per simulated network call
    pub calls: Vec<String>,
    /// Last batch request that reached the server
    pub last_batch: Option<OrderBatchRequest>,
    /// When set, every call fails as if the server were unreachable
    pub offline: bool,
    /// When set, the backend goes offline right after the next successful
    /// batch commit (exercises the best-effort post-commit refresh)
    pub drop_connection_after_commit: bool,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, BackendState> {
        self.state.lock().unwrap()
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    fn call(&self, name: &str) -> PosResult<()> {
        let mut state = self.state();
        state.calls.push(name.to_string());
        if state.offline {
            return Err(PosError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

// ==================== fixtures ====================

pub fn product(id: i64, name: &str, price: &str, stock: i32) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: price.parse().unwrap(),
        stock,
        category: None,
        description: None,
        sector: None,
        visible: true,
    }
}

pub fn day_pass_guest(id: i64, name: &str, uid: &str, debt: &str, limit: &str) -> Guest {
    Guest {
        id,
        kind: GuestKind::DayPass,
        name: name.to_string(),
        email: None,
        document: Some("123.456.789-00".to_string()),
        room: None,
        wristband_uid: uid.to_string(),
        spending_limit: Some(limit.parse().unwrap()),
        current_debt: debt.parse().unwrap(),
        entry_fee: None,
        active: true,
    }
}

pub fn regular_guest(id: i64, name: &str, uid: &str, room: &str) -> Guest {
    Guest {
        id,
        kind: GuestKind::Regular,
        name: name.to_string(),
        email: None,
        document: None,
        room: Some(room.to_string()),
        wristband_uid: uid.to_string(),
        spending_limit: None,
        current_debt: Decimal::ZERO,
        entry_fee: None,
        active: true,
    }
}

pub fn room(id: i64, number: &str, status: RoomStatus) -> Room {
    Room {
        id,
        number: number.to_string(),
        status,
        occupant: None,
    }
}

pub fn waiter(id: i64, pin: &str) -> Staff {
    Staff {
        id,
        name: "Bia".to_string(),
        pin: pin.to_string(),
        role: Role::Waiter,
        active: true,
    }
}

// ==================== trait impls ====================

#[async_trait]
impl GuestDirectory for FakeBackend {
    async fn by_wristband(&self, uid: &str) -> PosResult<Guest> {
        self.call("by_wristband")?;
        self.state()
            .guests
            .iter()
            .find(|g| g.wristband_uid == uid)
            .cloned()
            .ok_or_else(|| PosError::NotFound("No guest bound to this wristband".to_string()))
    }

    async fn by_room(&self, room_number: &str) -> PosResult<Guest> {
        self.call("by_room")?;
        let state = self.state();
        let mut matches = state
            .guests
            .iter()
            .filter(|g| g.active && g.room.as_deref() == Some(room_number));
        let first = matches
            .next()
            .cloned()
            .ok_or_else(|| PosError::NotFound("No active guest for this room".to_string()))?;
        if matches.next().is_some() {
            return Err(PosError::Validation(
                "Room has more than one active guest".to_string(),
            ));
        }
        Ok(first)
    }

    async fn by_name(&self, fragment: &str) -> PosResult<Vec<Guest>> {
        self.call("by_name")?;
        let needle = fragment.to_lowercase();
        Ok(self
            .state()
            .guests
            .iter()
            .filter(|g| g.active && g.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn all_by_room(&self, room_id: i64) -> PosResult<Vec<Guest>> {
        self.call("all_by_room")?;
        let state = self.state();
        let number = state
            .rooms
            .iter()
            .find(|r| r.id == room_id)
            .map(|r| r.number.clone())
            .ok_or_else(|| PosError::NotFound("Room not found".to_string()))?;
        Ok(state
            .guests
            .iter()
            .filter(|g| g.active && g.room.as_deref() == Some(number.as_str()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StockCatalog for FakeBackend {
    async fn list_visible(&self) -> PosResult<Vec<Product>> {
        self.call("list_visible")?;
        Ok(self
            .state()
            .products
            .iter()
            .filter(|p| p.visible)
            .cloned()
            .collect())
    }

    async fn refresh(&self) -> PosResult<Vec<Product>> {
        self.call("refresh")?;
        Ok(self.state().products.clone())
    }
}

#[async_trait]
impl OrderGateway for FakeBackend {
    async fn submit_batch(&self, request: &OrderBatchRequest) -> PosResult<Vec<OrderRecord>> {
        self.call("submit_batch")?;
        let mut state = self.state();
        state.last_batch = Some(request.clone());

        // Resolve the account the way the server would.
        let guest_idx = state
            .guests
            .iter()
            .position(|g| match (&request.wristband_uid, request.guest_id) {
                (Some(uid), _) => g.wristband_uid == *uid,
                (None, Some(id)) => g.id == id,
                (None, None) => false,
            })
            .ok_or_else(|| PosError::NotFound("Guest not found".to_string()))?;
        if !state.guests[guest_idx].active {
            return Err(PosError::GuestInactive(
                "Guest is no longer active".to_string(),
            ));
        }
        if request.guest_id.is_some()
            && request.manager_pin.as_deref() != Some(MANAGER_PIN)
        {
            return Err(PosError::Unauthorized(
                "Manager PIN rejected".to_string(),
            ));
        }

        // Server-side stock check.
        let mut total = Decimal::ZERO;
        for item in &request.items {
            let product = state
                .products
                .iter()
                .find(|p| p.id == item.product_id)
                .ok_or_else(|| PosError::NotFound("Product not found".to_string()))?;
            if !product.has_stock_for(item.quantity) {
                return Err(PosError::InsufficientStock {
                    product: Some(product.name.clone()),
                    message: format!("Insufficient stock for {}", product.name),
                });
            }
            total += product.price * Decimal::from(item.quantity);
        }

        // Server-side limit check.
        if !state.guests[guest_idx].fits_within_limit(total) {
            return Err(PosError::SpendingLimitExceeded {
                available: state.guests[guest_idx].available_limit(),
                message: "Day pass limit reached".to_string(),
            });
        }

        // Commit: one record per line, debt bumped, stock decremented.
        let guest_id = state.guests[guest_idx].id;
        let mut records = Vec::new();
        for item in &request.items {
            state.next_order_id += 1;
            let id = state.next_order_id;
            let product = state
                .products
                .iter_mut()
                .find(|p| p.id == item.product_id)
                .expect("checked above");
            product.stock -= item.quantity as i32;
            let amount = product.price * Decimal::from(item.quantity);
            records.push(OrderRecord {
                id,
                guest_id,
                product_id: product.id,
                status: OrderStatus::Pending,
                amount,
                created_at: Utc::now(),
                guest: None,
                product: None,
            });
        }
        state.guests[guest_idx].current_debt += total;
        state.orders.extend(records.clone());
        if state.drop_connection_after_commit {
            state.offline = true;
        }
        Ok(records)
    }

    async fn list_orders(&self, query: &OrderListQuery) -> PosResult<Vec<OrderRecord>> {
        self.call("list_orders")?;
        Ok(self
            .state()
            .orders
            .iter()
            .filter(|o| query.guest_id.is_none_or(|id| o.guest_id == id))
            .filter(|o| query.status.is_none_or(|s| o.status == s))
            .cloned()
            .collect())
    }

    async fn cancel_order(&self, order_id: i64, manager_pin: &str) -> PosResult<OrderRecord> {
        self.call("cancel_order")?;
        if manager_pin != MANAGER_PIN {
            return Err(PosError::Unauthorized("Manager PIN rejected".to_string()));
        }
        let mut state = self.state();
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| PosError::NotFound("Order not found".to_string()))?;
        if !order.status.is_cancellable() {
            return Err(PosError::Validation(
                "Order is not in a cancellable state".to_string(),
            ));
        }
        order.status = OrderStatus::Cancelled;
        Ok(order.clone())
    }
}

#[async_trait]
impl GuestLifecycle for FakeBackend {
    async fn check_in(&self, payload: &GuestCheckIn) -> PosResult<Guest> {
        self.call("check_in")?;
        let mut state = self.state();
        if state
            .guests
            .iter()
            .any(|g| g.active && g.wristband_uid == payload.wristband_uid)
        {
            return Err(PosError::WristbandInUse(
                "Wristband is already in use by an active guest".to_string(),
            ));
        }
        let id = state.guests.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let guest = Guest {
            id,
            kind: payload.kind,
            name: payload.name.clone(),
            email: payload.email.clone(),
            document: payload.document.clone(),
            room: payload.room.clone(),
            wristband_uid: payload.wristband_uid.clone(),
            spending_limit: payload.spending_limit,
            current_debt: if payload.paid_on_entry {
                Decimal::ZERO
            } else {
                payload.entry_fee.unwrap_or_default()
            },
            entry_fee: payload.entry_fee,
            active: true,
        };
        if let Some(room_id) = payload.room_id
            && let Some(room) = state.rooms.iter_mut().find(|r| r.id == room_id)
        {
            room.status = RoomStatus::Occupied;
        }
        state.guests.push(guest.clone());
        Ok(guest)
    }

    async fn checkout(&self, guest_id: i64, _method: SettlementMethod) -> PosResult<Guest> {
        self.call("checkout")?;
        let mut state = self.state();
        let number = {
            let guest = state
                .guests
                .iter_mut()
                .find(|g| g.id == guest_id)
                .ok_or_else(|| PosError::NotFound("Guest not found".to_string()))?;
            if !guest.active {
                return Err(PosError::GuestInactive("Already checked out".to_string()));
            }
            guest.active = false;
            guest.room.clone()
        };
        // Server drives OCCUPIED -> CLEANING on checkout.
        if let Some(number) = number
            && let Some(room) = state.rooms.iter_mut().find(|r| r.number == number)
        {
            room.status = RoomStatus::Cleaning;
            room.occupant = None;
        }
        Ok(state
            .guests
            .iter()
            .find(|g| g.id == guest_id)
            .cloned()
            .expect("guest exists"))
    }
}

#[async_trait]
impl RoomGateway for FakeBackend {
    async fn list_rooms(&self) -> PosResult<Vec<Room>> {
        self.call("list_rooms")?;
        Ok(self.state().rooms.clone())
    }

    async fn update_status(&self, room_id: i64, status: RoomStatus) -> PosResult<Room> {
        self.call("update_status")?;
        let mut state = self.state();
        let room = state
            .rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .ok_or_else(|| PosError::NotFound("Room not found".to_string()))?;
        room.status = status;
        Ok(room.clone())
    }
}

#[async_trait]
impl StaffGateway for FakeBackend {
    async fn authenticate(&self, pin: &str) -> PosResult<Staff> {
        self.call("authenticate")?;
        self.state()
            .staff
            .iter()
            .find(|s| s.pin == pin)
            .cloned()
            .ok_or_else(|| PosError::Unauthorized("Unknown PIN".to_string()))
    }
}
