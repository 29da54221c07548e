//! Order intake scenarios: authorization tiers, commit-time revalidation,
//! spending limits and the race-window rejections.

mod support;

use lagoa_pos::auth::{GuestSelection, OperatorContext, Pin};
use lagoa_pos::cart::Cart;
use lagoa_pos::error::PosError;
use lagoa_pos::intake::OrderIntakeOrchestrator;
use lagoa_pos::snapshot::Snapshot;
use rust_decimal::Decimal;
use shared::models::OrderStatus;
use support::{day_pass_guest, product, regular_guest, waiter, FakeBackend, MANAGER_PIN};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Backend with the standing fixture: ProductA 2x R$10, ProductB 1x R$5,
/// one day-pass guest (limit 30) and one regular room guest.
fn backend() -> FakeBackend {
    let backend = FakeBackend::new();
    {
        let mut state = backend.state();
        state.products = vec![
            product(1, "ProductA", "10.00", 10),
            product(2, "ProductB", "5.00", 10),
        ];
        state.guests = vec![
            day_pass_guest(1, "Ana", "NFC01", "5.00", "30.00"),
            regular_guest(2, "Rui", "NFC02", "101"),
        ];
        state.staff = vec![waiter(3, "1234")];
    }
    backend
}

fn cart_a2_b1(backend: &FakeBackend) -> Cart {
    let mut cart = Cart::new();
    let products = backend.state().products.clone();
    cart.add(products[0].clone()).unwrap();
    cart.increment(1).unwrap();
    cart.add(products[1].clone()).unwrap();
    cart
}

fn wristband(uid: &str) -> GuestSelection {
    GuestSelection::Wristband {
        uid: uid.to_string(),
    }
}

fn manual_selection(backend: &FakeBackend, guest_id: i64) -> GuestSelection {
    let guest = backend
        .state()
        .guests
        .iter()
        .find(|g| g.id == guest_id)
        .cloned()
        .unwrap();
    GuestSelection::Manual {
        guest: Snapshot::now(guest),
    }
}

#[tokio::test]
async fn kiosk_wristband_order_commits_and_clears_cart() {
    support::init_tracing();
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);
    assert_eq!(cart.total(), dec("25.00"));

    let receipt = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap();

    // one record per line
    assert_eq!(receipt.orders.len(), 2);
    assert!(cart.is_empty());
    // debt reflected after the post-commit refresh
    let refreshed = receipt.refreshed_guest.unwrap();
    assert_eq!(refreshed.current_debt, dec("30.00"));
    // stock decremented server-side
    assert_eq!(backend.state().products[0].stock, 8);
    // kiosk orders carry no staff attribution
    assert_eq!(backend.state().last_batch.as_ref().unwrap().staff_id, None);
}

#[tokio::test]
async fn limit_boundary_is_inclusive() {
    // 5 + 25 == 30 must commit
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);
    let receipt = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap();
    assert_eq!(receipt.orders.len(), 2);
}

#[tokio::test]
async fn one_cent_over_limit_rejects_with_cart_intact() {
    let backend = backend();
    backend.state().guests[0].current_debt = dec("6.00");
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);

    let err = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap_err();

    match &err {
        PosError::SpendingLimitExceeded { available, .. } => {
            assert_eq!(*available, Some(dec("24.00")));
        }
        other => panic!("wrong error: {other:?}"),
    }
    assert!(err.requires_escalation());
    assert!(!err.is_retryable());
    // cart preserved for the operator
    assert_eq!(cart.total_quantity(), 3);
    // nothing was submitted
    assert!(backend.state().last_batch.is_none());
}

#[tokio::test]
async fn stock_race_rejects_then_corrected_resubmit_succeeds() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);

    // another terminal buys ProductA down to one unit after the cart was built
    backend.state().products[0].stock = 1;

    let selection = wristband("NFC01");
    let err = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &selection, None)
        .await
        .unwrap_err();
    match &err {
        PosError::InsufficientStock { product, .. } => {
            assert_eq!(product.as_deref(), Some("ProductA"));
        }
        other => panic!("wrong error: {other:?}"),
    }
    assert_eq!(cart.total_quantity(), 3);

    // operator drops the quantity and resubmits with the same guest selection
    cart.decrement(1);
    let receipt = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &selection, None)
        .await
        .unwrap();
    assert_eq!(receipt.orders.len(), 2);
    assert!(cart.is_empty());
}

#[tokio::test]
async fn guest_deactivated_between_selection_and_submit() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);

    // front desk checks the guest out from another terminal
    backend.state().guests[0].active = false;

    let err = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, PosError::GuestInactive(_)));
    assert_eq!(cart.total_quantity(), 3);
    assert!(backend.state().last_batch.is_none());
}

#[tokio::test]
async fn manual_tier_without_pin_sends_nothing() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);
    let selection = manual_selection(&backend, 2);
    let operator = OperatorContext::waiter(waiter(3, "1234"));

    let err = intake
        .submit(&mut cart, &operator, &selection, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PosError::ManagerPinRequired));
    // zero network calls and an intact cart
    assert_eq!(backend.call_count(), 0);
    assert_eq!(cart.total_quantity(), 3);
}

#[tokio::test]
async fn manual_tier_with_pin_bundles_override_and_staff() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);
    let selection = manual_selection(&backend, 2);
    let operator = OperatorContext::waiter(waiter(3, "1234"));
    let pin = Pin::parse(MANAGER_PIN).unwrap();

    let receipt = intake
        .submit(&mut cart, &operator, &selection, Some(&pin))
        .await
        .unwrap();
    assert_eq!(receipt.orders.len(), 2);

    let state = backend.state();
    let batch = state.last_batch.as_ref().unwrap();
    assert_eq!(batch.guest_id, Some(2));
    assert_eq!(batch.manager_pin.as_deref(), Some(MANAGER_PIN));
    assert_eq!(batch.staff_id, Some(3));
    assert!(batch.wristband_uid.is_none());
}

#[tokio::test]
async fn rejected_manager_pin_reprompts_with_state_intact() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);
    let selection = manual_selection(&backend, 2);
    let operator = OperatorContext::waiter(waiter(3, "1234"));
    let bad_pin = Pin::parse("0000").unwrap();

    let err = intake
        .submit(&mut cart, &operator, &selection, Some(&bad_pin))
        .await
        .unwrap_err();
    assert!(matches!(err, PosError::Unauthorized(_)));
    // guest and cart survive; only the PIN needs re-entry
    assert_eq!(cart.total_quantity(), 3);

    let good_pin = Pin::parse(MANAGER_PIN).unwrap();
    let receipt = intake
        .submit(&mut cart, &operator, &selection, Some(&good_pin))
        .await
        .unwrap();
    assert_eq!(receipt.orders.len(), 2);
}

#[tokio::test]
async fn kiosk_refuses_manual_selection_locally() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);
    let selection = manual_selection(&backend, 2);

    let err = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &selection, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PosError::Validation(_)));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn empty_cart_rejected_locally() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = Cart::new();

    let err = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, PosError::Validation(_)));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn delisted_product_still_sells_while_stocked() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);

    // ProductB is delisted mid-session but keeps stock
    backend.state().products[1].visible = false;

    let receipt = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap();
    assert_eq!(receipt.orders.len(), 2);
}

#[tokio::test]
async fn product_removed_entirely_is_named() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);

    backend.state().products.retain(|p| p.id != 2);

    let err = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap_err();
    match err {
        PosError::NotFound(msg) => assert!(msg.contains("ProductB")),
        other => panic!("wrong error: {other:?}"),
    }
}

#[tokio::test]
async fn network_failure_preserves_cart_and_is_retryable() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);

    backend.set_offline(true);
    let err = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(cart.total_quantity(), 3);

    backend.set_offline(false);
    let receipt = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap();
    assert_eq!(receipt.orders.len(), 2);
}

#[tokio::test]
async fn post_commit_refresh_failure_does_not_undo_the_order() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);

    // the connection dies right after the commit lands
    backend.state().drop_connection_after_commit = true;

    let receipt = intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap();
    assert_eq!(receipt.orders.len(), 2);
    assert!(receipt.refreshed_guest.is_none());
    // the committed order stands and the cart is cleared regardless
    assert_eq!(backend.state().orders.len(), 2);
    assert!(cart.is_empty());
}

#[tokio::test]
async fn cancel_requires_manager_and_cancellable_state() {
    let backend = backend();
    let intake = OrderIntakeOrchestrator::new(backend.clone());
    let mut cart = cart_a2_b1(&backend);
    intake
        .submit(&mut cart, &OperatorContext::kiosk(), &wristband("NFC01"), None)
        .await
        .unwrap();

    let order = backend.state().orders[0].clone();
    let pin = Pin::parse(MANAGER_PIN).unwrap();
    let cancelled = intake.cancel(&order, &pin).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    // a delivered line is refused locally
    let calls_before = backend.call_count();
    let mut delivered = backend.state().orders[1].clone();
    delivered.status = OrderStatus::Delivered;
    let err = intake.cancel(&delivered, &pin).await.unwrap_err();
    assert!(matches!(err, PosError::Validation(_)));
    assert_eq!(backend.call_count(), calls_before);
}
