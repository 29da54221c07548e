//! Operator modes, PINs and the authorization policy
//!
//! Three tiers authorize an order:
//! 1. wristband — the guest scanned their own band; no override needed
//! 2. manual — staff typed a room/name; a manager PIN must be captured first
//! 3. staff — every waiter-mode order also carries the waiter's own PIN
//!
//! [`AuthContext`] is a tagged variant so a manual order without a captured
//! PIN cannot be constructed at all.

use crate::error::{PosError, PosResult};
use crate::ports::StaffGateway;
use crate::snapshot::Snapshot;
use shared::models::{Guest, Staff};
use std::fmt;

/// Terminal operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorMode {
    /// Self-service kiosk; guests identify by wristband only
    Kiosk,
    /// Waiter handheld; wristband or manual resolution
    Waiter,
    /// Front desk; check-in, checkout and room governance
    Reception,
}

/// A validated 4-digit PIN
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    /// Parse and validate a PIN. Exactly 4 ASCII digits.
    pub fn parse(raw: &str) -> PosResult<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(PosError::Validation(
                "PIN must be exactly 4 digits".to_string(),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// PINs are credentials; never let them leak through debug logs.
impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// Who is driving the terminal
#[derive(Debug, Clone)]
pub struct OperatorContext {
    pub mode: OperatorMode,
    /// Signed-in staff member; required outside kiosk mode
    pub staff: Option<Staff>,
}

impl OperatorContext {
    pub fn kiosk() -> Self {
        Self {
            mode: OperatorMode::Kiosk,
            staff: None,
        }
    }

    pub fn waiter(staff: Staff) -> Self {
        Self {
            mode: OperatorMode::Waiter,
            staff: Some(staff),
        }
    }

    pub fn reception(staff: Staff) -> Self {
        Self {
            mode: OperatorMode::Reception,
            staff: Some(staff),
        }
    }

    /// The staff credential attached to order submissions. Kiosk orders are
    /// unattributed; every other mode requires a signed-in staff member.
    pub fn staff_for_orders(&self) -> PosResult<Option<&Staff>> {
        match self.mode {
            OperatorMode::Kiosk => Ok(None),
            _ => self
                .staff
                .as_ref()
                .map(Some)
                .ok_or_else(|| PosError::Unauthorized("Staff member is not signed in".to_string())),
        }
    }
}

/// How the guest was identified for the pending order
#[derive(Debug, Clone)]
pub enum GuestSelection {
    /// Wristband scanned during this session
    Wristband { uid: String },
    /// Staff picked the guest by room or name lookup
    Manual { guest: Snapshot<Guest> },
}

/// Authorization context bundled into a submission
#[derive(Debug, Clone)]
pub enum AuthContext {
    Wristband { uid: String },
    Manual { guest_id: i64, manager_pin: Pin },
}

/// Decides which tier a submission runs under and whether it may proceed
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationPolicy;

impl AuthorizationPolicy {
    /// Whether this mode/selection combination needs a manager override.
    pub fn requires_override(mode: OperatorMode, selection: &GuestSelection) -> bool {
        matches!(
            (mode, selection),
            (OperatorMode::Waiter, GuestSelection::Manual { .. })
        )
    }

    /// Build the authorization context for a submission, entirely locally.
    ///
    /// Kiosks only accept wristband identification, and a manual selection
    /// without a captured manager PIN is blocked here — before any network
    /// traffic happens.
    pub fn build_context(
        mode: OperatorMode,
        selection: &GuestSelection,
        manager_pin: Option<&Pin>,
    ) -> PosResult<AuthContext> {
        match (mode, selection) {
            (_, GuestSelection::Wristband { uid }) => Ok(AuthContext::Wristband {
                uid: uid.clone(),
            }),
            (OperatorMode::Kiosk, GuestSelection::Manual { .. }) => Err(PosError::Validation(
                "Kiosk orders require a wristband read".to_string(),
            )),
            (OperatorMode::Reception, GuestSelection::Manual { .. }) => Err(PosError::Validation(
                "Orders are not placed from the front desk".to_string(),
            )),
            (OperatorMode::Waiter, GuestSelection::Manual { guest }) => match manager_pin {
                Some(pin) => Ok(AuthContext::Manual {
                    guest_id: guest.peek().id,
                    manager_pin: pin.clone(),
                }),
                None => Err(PosError::ManagerPinRequired),
            },
        }
    }
}

/// Sign a staff member in by PIN.
///
/// The PIN format is checked locally first; inactive accounts are rejected
/// even if the backend still resolves them.
pub async fn sign_in<B: StaffGateway>(backend: &B, pin: &str) -> PosResult<Staff> {
    let pin = Pin::parse(pin)?;
    let staff = backend.authenticate(pin.as_str()).await?;
    if !staff.active {
        return Err(PosError::Unauthorized(
            "Staff account is disabled".to_string(),
        ));
    }
    Ok(staff)
}
