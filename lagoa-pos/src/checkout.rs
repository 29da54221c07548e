//! Checkout orchestrator
//!
//! Closes a guest's account. Amount due is the ledger's `current_debt` — the
//! client displays order history as supporting detail but never re-derives
//! the figure. A settlement method is part of the settle call itself, so an
//! unsettled submission is unrepresentable. The room's move to CLEANING is
//! server-driven; the grid is re-fetched, never assumed.

use crate::error::{PosError, PosResult};
use crate::ports::{GuestDirectory, GuestLifecycle, OrderGateway, RoomGateway};
use crate::snapshot::Snapshot;
use rust_decimal::Decimal;
use shared::models::{Guest, OrderRecord, Room, SettlementMethod};
use shared::request::OrderListQuery;

/// Opening a room-based checkout either lands on the single occupant or
/// demands an explicit choice.
#[derive(Debug)]
pub enum CheckoutStart {
    Single(CheckoutSession),
    /// More than one active occupant; the operator must pick one via
    /// [`CheckoutOrchestrator::select_occupant`].
    Multiple(Vec<Guest>),
}

/// One guest staged for checkout
#[derive(Debug)]
pub struct CheckoutSession {
    guest: Snapshot<Guest>,
    /// Order history, display-only
    pub orders: Vec<OrderRecord>,
}

impl CheckoutSession {
    pub fn guest(&self) -> &Guest {
        self.guest.peek()
    }

    /// Amount due as the ledger defines it (already net of entry deposit).
    pub fn amount_due(&self) -> Decimal {
        self.guest.peek().current_debt
    }
}

/// Result of a settled checkout
#[derive(Debug)]
pub struct CheckoutReceipt {
    /// The deactivated guest record as returned by the server
    pub guest: Guest,
    /// Room grid re-fetched after settlement; empty when the refresh failed.
    /// The checked-out room normally shows CLEANING here, not FREE.
    pub rooms: Vec<Room>,
}

/// Front-desk checkout coordinator
#[derive(Debug, Clone)]
pub struct CheckoutOrchestrator<B> {
    backend: B,
}

impl<B> CheckoutOrchestrator<B>
where
    B: GuestDirectory + GuestLifecycle + OrderGateway + RoomGateway,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Stage a checkout from a wristband read.
    pub async fn begin_by_wristband(&self, uid: &str) -> PosResult<CheckoutSession> {
        let guest = self.backend.by_wristband(uid).await?;
        self.stage(guest).await
    }

    /// Stage a checkout from an occupied room.
    ///
    /// A room with several active occupants yields them all; the operator
    /// picks one explicitly rather than the client guessing.
    pub async fn begin_by_room(&self, room: &Room) -> PosResult<CheckoutStart> {
        let mut guests = self.backend.all_by_room(room.id).await?;
        guests.retain(|g| g.active);
        match guests.len() {
            0 => Err(PosError::NotFound(format!(
                "No active guest in room {}",
                room.number
            ))),
            1 => {
                let guest = guests.remove(0);
                Ok(CheckoutStart::Single(self.stage(guest).await?))
            }
            _ => Ok(CheckoutStart::Multiple(guests)),
        }
    }

    /// Stage the occupant the operator picked from a multi-occupant room.
    pub async fn select_occupant(&self, guest: Guest) -> PosResult<CheckoutSession> {
        self.stage(guest).await
    }

    /// Settle the account and close it.
    ///
    /// The guest is revalidated immediately before the call; settling an
    /// account another terminal already closed fails with `GuestInactive`
    /// instead of double-charging.
    #[tracing::instrument(name = "checkout", skip_all, fields(method = ?method))]
    pub async fn settle(
        &self,
        session: CheckoutSession,
        method: SettlementMethod,
    ) -> PosResult<CheckoutReceipt> {
        let prior = session.guest.into_inner();
        let fresh = self.backend.by_wristband(&prior.wristband_uid).await?;
        if !fresh.active {
            return Err(PosError::GuestInactive(
                "Guest was already checked out".to_string(),
            ));
        }

        let guest = self.backend.checkout(fresh.id, method).await?;
        tracing::info!(debt = %prior.current_debt, "account settled");

        // Server moved the room to CLEANING; show whatever it decided.
        let rooms = match self.backend.list_rooms().await {
            Ok(rooms) => rooms,
            Err(e) => {
                tracing::debug!(error = %e, "room grid refresh after checkout failed");
                Vec::new()
            }
        };

        Ok(CheckoutReceipt { guest, rooms })
    }

    async fn stage(&self, guest: Guest) -> PosResult<CheckoutSession> {
        if !guest.active {
            return Err(PosError::GuestInactive(
                "Guest is no longer active".to_string(),
            ));
        }
        // History is supporting detail; a miss must not block the checkout.
        let orders = match self
            .backend
            .list_orders(&OrderListQuery::for_guest(guest.id))
            .await
        {
            Ok(orders) => orders,
            Err(e) => {
                tracing::debug!(error = %e, "order history fetch failed");
                Vec::new()
            }
        };
        Ok(CheckoutSession {
            guest: Snapshot::now(guest),
            orders,
        })
    }
}
