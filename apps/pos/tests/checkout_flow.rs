//! End-to-end flow against an in-memory store: first-run bootstrap,
//! login, cart edits, cash entry, receipt confirmation, and history.

use tally_pos::commands::{auth, bootstrap, cart, catalog, checkout, sales};
use tally_pos::presentation::{FeedbackSound, PresentationEvent, RecordingPresentation};
use tally_pos::state::{AppContext, CheckoutStage, ConfigState};
use tally_store::{Store, StoreConfig};

async fn test_app() -> (AppContext, RecordingPresentation) {
    let store = Store::new(StoreConfig::in_memory()).await.unwrap();
    let recorder = RecordingPresentation::new();
    let ctx = AppContext::new(
        store,
        ConfigState::default(),
        Box::new(recorder.clone()),
    );
    (ctx, recorder)
}

fn product_id_by_name(ctx: &AppContext, name: &str) -> String {
    ctx.session
        .products
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id.clone())
        .unwrap()
}

#[tokio::test]
async fn first_run_question_is_asked_exactly_once() {
    let (mut ctx, _) = test_app().await;

    assert!(bootstrap::is_first_run(&ctx).await.unwrap());
    let seeded = bootstrap::start_with_sample_data(&mut ctx).await.unwrap();
    assert!(seeded > 0);
    assert!(!bootstrap::is_first_run(&ctx).await.unwrap());

    // A second seed run would duplicate the catalog, so the marker
    // must also hold after a blank start on a fresh database.
    let (mut blank, _) = test_app().await;
    bootstrap::start_blank(&mut blank).await.unwrap();
    assert!(!bootstrap::is_first_run(&blank).await.unwrap());
    assert_eq!(blank.session.products.len(), 0);
}

#[tokio::test]
async fn failed_login_alerts_and_keeps_the_gate_closed() {
    let (mut ctx, recorder) = test_app().await;
    bootstrap::start_with_sample_data(&mut ctx).await.unwrap();

    assert!(!auth::login(&mut ctx, "kasir", "wrong").await.unwrap());
    assert!(!ctx.session.is_logged_in());
    assert!(recorder
        .events()
        .contains(&PresentationEvent::Alerted("Wrong username or password".to_string())));

    assert!(auth::login(&mut ctx, "kasir", "kasir123").await.unwrap());
    assert!(ctx.session.is_logged_in());
}

#[tokio::test]
async fn full_sale_reaches_the_history() {
    let (mut ctx, recorder) = test_app().await;
    bootstrap::start_with_sample_data(&mut ctx).await.unwrap();
    auth::login(&mut ctx, "kasir", "kasir123").await.unwrap();

    // Filter, then pick an item twice: one line, qty 2.
    catalog::set_keyword(&mut ctx, "teh");
    let hits = catalog::filtered_products(&ctx);
    assert_eq!(hits.len(), 1);
    let teh = hits[0].id.clone();

    cart::add_to_cart(&mut ctx, &teh).unwrap();
    cart::add_to_cart(&mut ctx, &teh).unwrap();
    assert_eq!(ctx.session.cart.unique_items(), 1);
    assert_eq!(ctx.session.cart.total_price().minor(), 10_000);

    // Nothing payable until cash covers the total.
    assert!(!checkout::can_submit(&ctx));
    assert!(checkout::submit(&mut ctx).is_err());

    checkout::set_cash_from_text(&mut ctx, "Rp 25.000");
    assert_eq!(ctx.session.register.cash().minor(), 25_000);
    assert_eq!(ctx.session.register.change().minor(), 15_000);
    assert!(checkout::can_submit(&ctx));

    checkout::submit(&mut ctx).unwrap();
    assert!(matches!(ctx.session.stage, CheckoutStage::ReceiptPending(_)));

    let record = checkout::confirm_and_record(&mut ctx, true).await.unwrap();
    assert!(record.receipt_no.starts_with("TALLY-POS-"));
    assert_eq!(record.total_minor, 10_000);

    // The next sale starts clean.
    assert!(ctx.session.cart.is_empty());
    assert_eq!(ctx.session.register.cash().minor(), 0);
    assert!(matches!(ctx.session.stage, CheckoutStage::Idle));

    let history = sales::list_sales(&ctx).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].receipt_no, record.receipt_no);
    assert_eq!(history[0].items.len(), 1);
    assert_eq!(history[0].items[0].qty, 2);

    let events = recorder.events();
    assert!(events.contains(&PresentationEvent::ReceiptShown(record.receipt_no.clone())));
    assert!(events.contains(&PresentationEvent::ReceiptPrinted(record.receipt_no.clone())));
    assert!(events.contains(&PresentationEvent::ReceiptClosed));
    assert!(events.contains(&PresentationEvent::Played(FeedbackSound::Beep)));
}

#[tokio::test]
async fn cancelling_a_receipt_keeps_the_sale_editable() {
    let (mut ctx, _) = test_app().await;
    bootstrap::start_with_sample_data(&mut ctx).await.unwrap();

    let nasgor = product_id_by_name(&ctx, "Nasi Goreng");
    cart::add_to_cart(&mut ctx, &nasgor).unwrap();
    checkout::add_cash(&mut ctx, 20_000);
    checkout::submit(&mut ctx).unwrap();

    checkout::cancel_receipt(&mut ctx);
    assert!(matches!(ctx.session.stage, CheckoutStage::Idle));
    assert!(!ctx.session.cart.is_empty());
    assert_eq!(ctx.session.register.cash().minor(), 20_000);

    // Nothing was recorded.
    assert!(sales::list_sales(&ctx).await.unwrap().is_empty());

    // Confirming now is a stage error.
    assert!(checkout::confirm_and_record(&mut ctx, false).await.is_err());
}

#[tokio::test]
async fn storage_failure_keeps_the_receipt_pending() {
    let (mut ctx, recorder) = test_app().await;
    bootstrap::start_with_sample_data(&mut ctx).await.unwrap();

    let nasgor = product_id_by_name(&ctx, "Nasi Goreng");
    cart::add_to_cart(&mut ctx, &nasgor).unwrap();
    checkout::add_cash(&mut ctx, 20_000);
    checkout::submit(&mut ctx).unwrap();

    // Recording fails once the pool is gone; the receipt must survive.
    ctx.store.close().await;
    assert!(checkout::confirm_and_record(&mut ctx, false).await.is_err());
    assert!(matches!(ctx.session.stage, CheckoutStage::ReceiptPending(_)));
    assert!(!ctx.session.cart.is_empty());
    assert!(!recorder.events().contains(&PresentationEvent::ReceiptClosed));

    // The operator can still back out of the modal.
    checkout::cancel_receipt(&mut ctx);
    assert!(matches!(ctx.session.stage, CheckoutStage::Idle));
    assert!(recorder.events().contains(&PresentationEvent::ReceiptClosed));
}

#[tokio::test]
async fn logout_abandons_the_sale_in_progress() {
    let (mut ctx, _) = test_app().await;
    bootstrap::start_with_sample_data(&mut ctx).await.unwrap();
    auth::login(&mut ctx, "kasir", "kasir123").await.unwrap();

    let nasgor = product_id_by_name(&ctx, "Nasi Goreng");
    cart::add_to_cart(&mut ctx, &nasgor).unwrap();
    checkout::add_cash(&mut ctx, 20_000);

    auth::logout(&mut ctx);
    assert!(!ctx.session.is_logged_in());
    assert!(ctx.session.cart.is_empty());
    assert_eq!(ctx.session.register.cash().minor(), 0);
}

#[tokio::test]
async fn unknown_product_cannot_enter_the_cart() {
    let (mut ctx, _) = test_app().await;
    bootstrap::start_with_sample_data(&mut ctx).await.unwrap();

    let err = cart::add_to_cart(&mut ctx, "no-such-id").unwrap_err();
    assert_eq!(err.code, tally_pos::error::ErrorCode::NotFound);
    assert!(ctx.session.cart.is_empty());
}
