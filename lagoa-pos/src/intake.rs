//! Order intake orchestrator
//!
//! Turns a populated cart plus an operator context into a committed order or
//! a typed failure. The staleness window is closed immediately before the
//! commit: the guest is re-fetched, the catalog is re-fetched and merged into
//! the cart, and the spending limit is recomputed from both — only then is
//! the batch submitted as one atomic request.
//!
//! Every local check runs before the first network call, so a submission
//! blocked on authorization (empty cart, kiosk without a wristband, manual
//! tier without a captured manager PIN) provably sends nothing.

use crate::auth::{AuthContext, AuthorizationPolicy, GuestSelection, OperatorContext, Pin};
use crate::cart::Cart;
use crate::error::{PosError, PosResult};
use crate::ports::{GuestDirectory, OrderGateway, StockCatalog};
use crate::snapshot::Snapshot;
use shared::models::{Guest, OrderRecord};
use shared::request::OrderBatchRequest;
use uuid::Uuid;

/// Result of a committed submission
#[derive(Debug)]
pub struct IntakeReceipt {
    /// One persisted record per cart line
    pub orders: Vec<OrderRecord>,
    /// Guest re-fetched after commit to reflect the new debt. `None` when the
    /// post-commit refresh failed; the commit itself stands regardless.
    pub refreshed_guest: Option<Guest>,
}

/// Top-level coordinator for order submission
#[derive(Debug, Clone)]
pub struct OrderIntakeOrchestrator<B> {
    backend: B,
}

impl<B> OrderIntakeOrchestrator<B>
where
    B: GuestDirectory + StockCatalog + OrderGateway,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Run the pre-submission checklist and submit the cart.
    ///
    /// On success the cart is cleared. On any failure the cart — lines and
    /// quantities — is left exactly as it was, so the operator corrects the
    /// one flagged problem and resubmits without rebuilding state.
    #[tracing::instrument(
        name = "order_intake",
        skip_all,
        fields(attempt = %Uuid::new_v4(), mode = ?operator.mode)
    )]
    pub async fn submit(
        &self,
        cart: &mut Cart,
        operator: &OperatorContext,
        selection: &GuestSelection,
        manager_pin: Option<&Pin>,
    ) -> PosResult<IntakeReceipt> {
        // Local validation: nothing below this block touches the network.
        if cart.is_empty() {
            return Err(PosError::Validation("Cart is empty".to_string()));
        }
        let staff = operator.staff_for_orders()?;
        let auth = AuthorizationPolicy::build_context(operator.mode, selection, manager_pin)?;

        // Revalidate the guest, discarding whatever the session had cached.
        let guest = self.revalidate_guest(selection).await?;

        // Revalidate stock against the unfiltered live catalog.
        let fresh = self.backend.refresh().await?;
        cart.merge_refreshed(&fresh);
        for line in cart.lines() {
            if !fresh.iter().any(|p| p.id == line.product.id) {
                return Err(PosError::NotFound(format!(
                    "{} is no longer available",
                    line.product.name
                )));
            }
            if !line.product.has_stock_for(line.quantity) {
                tracing::warn!(
                    product = %line.product.name,
                    requested = line.quantity,
                    available = line.product.stock,
                    "stock revalidation failed"
                );
                return Err(PosError::InsufficientStock {
                    product: Some(line.product.name.clone()),
                    message: format!(
                        "Insufficient stock for {}. Available: {}, requested: {}",
                        line.product.name, line.product.stock, line.quantity
                    ),
                });
            }
        }

        // Recompute the spending limit from fresh debt and the revalidated
        // cart total. Exactly reaching the limit is allowed.
        let guest = guest.into_inner();
        let total = cart.total();
        if !guest.fits_within_limit(total) {
            let available = guest.available_limit();
            tracing::warn!(guest = guest.id, %total, "spending limit exceeded");
            return Err(PosError::SpendingLimitExceeded {
                available,
                message: match available {
                    Some(a) => format!(
                        "Day pass spending limit exceeded. Available: {a}, order total: {total}"
                    ),
                    None => "Day pass spending limit exceeded".to_string(),
                },
            });
        }

        let request = build_request(cart, &auth, staff.map(|s| s.id));
        let orders = self.backend.submit_batch(&request).await?;
        tracing::info!(guest = guest.id, lines = orders.len(), %total, "order committed");

        // The commit stands even if the ledger refresh below fails.
        cart.clear();
        let refreshed_guest = self
            .backend
            .by_wristband(&guest.wristband_uid)
            .await
            .map_err(|e| tracing::debug!(error = %e, "post-commit guest refresh failed"))
            .ok();

        Ok(IntakeReceipt {
            orders,
            refreshed_guest,
        })
    }

    /// Cancel a persisted order line. Requires manager authorization and is
    /// rejected locally once a line was delivered or already cancelled.
    pub async fn cancel(
        &self,
        record: &OrderRecord,
        manager_pin: &Pin,
    ) -> PosResult<OrderRecord> {
        if !record.status.is_cancellable() {
            return Err(PosError::Validation(
                "Only pending, preparing or ready lines can be cancelled".to_string(),
            ));
        }
        self.backend
            .cancel_order(record.id, manager_pin.as_str())
            .await
    }

    /// Re-fetch the selected guest and reject anything that changed under us.
    async fn revalidate_guest(&self, selection: &GuestSelection) -> PosResult<Snapshot<Guest>> {
        let fresh = match selection {
            GuestSelection::Wristband { uid } => self.backend.by_wristband(uid).await?,
            GuestSelection::Manual { guest } => {
                let prior = guest.peek();
                let fresh = match prior.room.as_deref() {
                    Some(room) => self.backend.by_room(room).await?,
                    None => self
                        .backend
                        .by_name(&prior.name)
                        .await?
                        .into_iter()
                        .find(|g| g.id == prior.id)
                        .ok_or_else(|| {
                            PosError::GuestInactive(
                                "Guest could not be re-resolved; search again".to_string(),
                            )
                        })?,
                };
                if fresh.id != prior.id {
                    return Err(PosError::GuestInactive(
                        "The guest for this room changed; search again".to_string(),
                    ));
                }
                fresh
            }
        };
        if !fresh.active {
            return Err(PosError::GuestInactive(
                "Guest is no longer active. Check with the front desk".to_string(),
            ));
        }
        Ok(Snapshot::now(fresh))
    }
}

fn build_request(cart: &Cart, auth: &AuthContext, staff_id: Option<i64>) -> OrderBatchRequest {
    let items = cart.to_line_inputs();
    match auth {
        AuthContext::Wristband { uid } => OrderBatchRequest {
            items,
            wristband_uid: Some(uid.clone()),
            guest_id: None,
            manager_pin: None,
            staff_id,
        },
        AuthContext::Manual {
            guest_id,
            manager_pin,
        } => OrderBatchRequest {
            items,
            wristband_uid: None,
            guest_id: Some(*guest_id),
            manager_pin: Some(manager_pin.as_str().to_string()),
            staff_id,
        },
    }
}
