//! End-to-end purchase scenarios over a file-backed cart.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cart_checkout::{
    BillingDetails, CheckoutBackend, CheckoutConfig, CheckoutError, CheckoutInitiator,
    CheckoutPhase, Navigator, PurchaseFlow, Result, SessionResponse, SessionStatus, Url,
};
use cart_core::{CartStore, FileStorage, NewCartItem, ShoppingItem};

/// Backend that counts calls and answers with a fixed URL, or rejects
struct StubBackend {
    url: Option<String>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CheckoutBackend for StubBackend {
    async fn create_checkout_session(
        &self,
        _items: &[ShoppingItem],
        _success_url: &str,
        _cancel_url: &str,
    ) -> Result<SessionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.url {
            Some(url) => Ok(SessionResponse::new(url.as_str()).with_id("cs_live_1")),
            None => Err(CheckoutError::SessionCreation("503 Service Unavailable".into())),
        }
    }

    async fn session_status(&self, _session_id: &str) -> Result<SessionStatus> {
        Ok(SessionStatus::Completed {
            response: "paid".into(),
            user_principal: None,
        })
    }
}

struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _url: &Url) -> Result<()> {
        Ok(())
    }
}

fn billing() -> BillingDetails {
    BillingDetails {
        full_name: "Ravi Kumar".into(),
        email: "ravi@example.in".into(),
        phone: "9000000000".into(),
        street: "4 Park Street".into(),
        city: "Kolkata".into(),
        state: "West Bengal".into(),
        postal_code: "700016".into(),
        ..BillingDetails::default()
    }
}

fn initiator(url: Option<&str>) -> (CheckoutInitiator<StubBackend>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let backend = StubBackend {
        url: url.map(str::to_string),
        calls: calls.clone(),
    };
    (CheckoutInitiator::new(backend, CheckoutConfig::default()), calls)
}

#[tokio::test]
async fn test_purchase_survives_reload_then_clears_on_success() {
    let dir = tempfile::tempdir().unwrap();

    // Page one: fill the cart and start checkout.
    {
        let (initiator, calls) = initiator(Some("https://checkout.example/pay/cs_live_1"));
        let mut flow = PurchaseFlow::new(
            CartStore::load(FileStorage::new(dir.path())),
            initiator,
            NoopNavigator,
        );

        flow.add_to_cart(NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr"));
        flow.add_to_cart(NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr"));
        flow.add_to_cart(NewCartItem::new("P2", "TP-Link WiFi Router", 50_000, "inr"));

        assert_eq!(flow.cart().cart_total(), 350_000);

        flow.begin_checkout(true, &billing()).await.unwrap();
        assert_eq!(flow.phase(), CheckoutPhase::Redirected);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    // Page two: the success view loads the same cart and clears it.
    {
        let (initiator, _) = initiator(None);
        let mut flow = PurchaseFlow::new(
            CartStore::load(FileStorage::new(dir.path())),
            initiator,
            NoopNavigator,
        );
        assert_eq!(flow.phase(), CheckoutPhase::HasItems);
        assert_eq!(flow.cart().cart_item_count(), 3);

        let status = flow.initiator().session_status("cs_live_1").await.unwrap();
        assert!(status.is_completed());

        flow.complete_purchase();
        flow.complete_purchase();
    }

    // Page three: nothing left.
    assert!(CartStore::load(FileStorage::new(dir.path())).is_empty());
}

#[tokio::test]
async fn test_rejected_session_keeps_cart_for_retry() {
    let dir = tempfile::tempdir().unwrap();
    let (initiator, calls) = initiator(None);
    let mut flow = PurchaseFlow::new(
        CartStore::load(FileStorage::new(dir.path())),
        initiator,
        NoopNavigator,
    );
    flow.add_to_cart(NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr"));

    for attempt in 1..=2 {
        let error = flow.begin_checkout(true, &billing()).await.unwrap_err();
        assert!(error.is_retryable());
        assert_eq!(calls.load(Ordering::SeqCst), attempt);
    }

    assert_eq!(flow.phase(), CheckoutPhase::HasItems);
    let reloaded = CartStore::load(FileStorage::new(dir.path()));
    assert_eq!(reloaded.items(), flow.cart().items());
}

#[tokio::test]
async fn test_empty_url_is_not_a_session() {
    let (initiator, calls) = initiator(Some(""));
    let items = [NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr").to_shopping_item(1)];

    let result = initiator.create_checkout_session(&items).await;

    assert!(matches!(result, Err(CheckoutError::SessionCreation(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_sessions_are_not_deduplicated() {
    let (initiator, calls) = initiator(Some("https://checkout.example/pay/cs"));
    let items = [NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr").to_shopping_item(1)];

    initiator.create_checkout_session(&items).await.unwrap();
    initiator.create_checkout_session(&items).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
