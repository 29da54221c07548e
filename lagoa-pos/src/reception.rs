//! Reception orchestrator (check-in)
//!
//! Guest creation with the front desk's rules: field validation, kind-specific
//! requirements (a day pass needs a document, a regular guest needs a free
//! room), entry payment either settled on the spot or explicitly acknowledged
//! as opening debt, and a distinct conflict when the wristband is already
//! bound to an active guest.

use crate::error::{PosError, PosResult};
use crate::ports::GuestLifecycle;
use crate::snapshot::Snapshot;
use rust_decimal::Decimal;
use shared::models::{Guest, GuestCheckIn, GuestKind, Room, SettlementMethod};
use validator::Validate;

/// Check-in form state as the operator assembled it
#[derive(Debug, Clone)]
pub struct CheckInDraft {
    pub kind: GuestKind,
    pub name: String,
    pub email: Option<String>,
    pub document: Option<String>,
    /// Room picked from the grid; required for regular guests
    pub room: Option<Snapshot<Room>>,
    pub wristband_uid: String,
    /// Hard limit for day passes
    pub spending_limit: Option<Decimal>,
    /// Day rate / entry amount
    pub entry_fee: Option<Decimal>,
    pub paid_on_entry: bool,
    pub settlement_method: Option<SettlementMethod>,
    /// Operator confirmed that an unpaid entry fee becomes opening debt
    pub debt_acknowledged: bool,
}

/// Front-desk check-in coordinator
#[derive(Debug, Clone)]
pub struct ReceptionOrchestrator<B> {
    backend: B,
}

impl<B: GuestLifecycle> ReceptionOrchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Validate the draft and create the guest.
    ///
    /// Everything checkable locally is rejected before the network call; the
    /// server still owns wristband uniqueness and room state, so its
    /// conflicts are surfaced as typed errors.
    #[tracing::instrument(name = "check_in", skip_all, fields(kind = ?draft.kind))]
    pub async fn check_in(&self, draft: CheckInDraft) -> PosResult<Guest> {
        let payload = self.validate(draft)?;
        let guest = self.backend.check_in(&payload).await?;
        tracing::info!(guest = guest.id, "guest checked in");
        Ok(guest)
    }

    fn validate(&self, draft: CheckInDraft) -> PosResult<GuestCheckIn> {
        match draft.kind {
            GuestKind::DayPass => {
                if draft.document.as_deref().map(str::trim).unwrap_or("").is_empty() {
                    return Err(PosError::Validation(
                        "A document is required for day passes".to_string(),
                    ));
                }
            }
            GuestKind::Regular => {
                if draft.room.is_none() {
                    return Err(PosError::Validation(
                        "Select a room for the guest".to_string(),
                    ));
                }
            }
            GuestKind::Vip => {}
        }

        if let Some(room) = &draft.room
            && !room.peek().status.is_selectable_for_check_in()
        {
            return Err(PosError::Validation(format!(
                "Room {} is not free",
                room.peek().number
            )));
        }

        let entry_fee = draft.entry_fee.unwrap_or_default();
        if draft.paid_on_entry {
            if entry_fee <= Decimal::ZERO {
                return Err(PosError::Validation(
                    "Enter the amount paid on entry".to_string(),
                ));
            }
            if draft.settlement_method.is_none() {
                return Err(PosError::Validation(
                    "Select the settlement method for the entry payment".to_string(),
                ));
            }
        } else if entry_fee > Decimal::ZERO && !draft.debt_acknowledged {
            // The guest leaves the desk owing the entry fee; that needs an
            // explicit confirmation, not a silent default.
            return Err(PosError::Validation(
                "Unpaid entry fee must be acknowledged as opening debt".to_string(),
            ));
        }

        let (room, room_id) = match &draft.room {
            Some(snap) => {
                let room = snap.peek();
                (Some(room.number.clone()), Some(room.id))
            }
            None => (None, None),
        };

        let payload = GuestCheckIn {
            kind: draft.kind,
            name: draft.name.trim().to_string(),
            email: draft
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            document: draft
                .document
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            room,
            room_id,
            wristband_uid: draft.wristband_uid.trim().to_string(),
            spending_limit: draft.spending_limit,
            entry_fee: draft.entry_fee,
            paid_on_entry: draft.paid_on_entry,
            settlement_method: draft.settlement_method,
        };

        payload
            .validate()
            .map_err(|e| PosError::Validation(e.to_string()))?;
        Ok(payload)
    }
}
