//! Lagoa POS - order intake and guest billing core
//!
//! The terminal-side logic shared by kiosks, waiter handhelds and the front
//! desk: the cart, the authorization policy for the three order tiers
//! (wristband / manual + manager override / staff attribution), the intake
//! orchestrator with its commit-time revalidation, checkout and check-in
//! flows, and the room status registry.
//!
//! The remote service owns guests, stock and rooms; everything here works on
//! short-lived [`Snapshot`]s and re-fetches immediately before any decision
//! that moves money.

pub mod auth;
pub mod backend;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod intake;
pub mod ports;
pub mod reception;
pub mod rooms;
pub mod snapshot;
pub mod summary;
pub mod wristband;

pub use auth::{AuthContext, AuthorizationPolicy, GuestSelection, OperatorContext, OperatorMode, Pin};
pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutOrchestrator, CheckoutReceipt, CheckoutSession, CheckoutStart};
pub use error::{PosError, PosResult};
pub use intake::{IntakeReceipt, OrderIntakeOrchestrator};
pub use reception::{CheckInDraft, ReceptionOrchestrator};
pub use rooms::RoomRegistry;
pub use snapshot::Snapshot;
pub use wristband::{read_wristband, ScriptedReader, WristbandRead, WristbandReader};
