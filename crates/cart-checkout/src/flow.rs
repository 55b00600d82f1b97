//! Purchase Flow
//!
//! Ties the cart, the initiator and browser navigation together and tracks
//! where the visitor is in the purchase.
//!
//! ```text
//!  EmptyCart ──add──▶ HasItems ──begin_checkout──▶ AwaitingSession ──url──▶ Redirected
//!      ▲                 │  ▲                            │                      │
//!      └─remove/clear────┘  └────────── failure ─────────┘                      │
//!      └──────────────────────────── complete_purchase ─────────────────────────┘
//! ```

use cart_core::{CartStorage, CartStore, NewCartItem, Product};
use reqwest::Url;

use crate::backend::CheckoutBackend;
use crate::billing::BillingDetails;
use crate::checkout::{CheckoutInitiator, CheckoutSession};
use crate::error::{CheckoutError, Result};

/// Hands the visitor off to another page
pub trait Navigator {
    fn navigate(&self, url: &Url) -> Result<()>;
}

/// Where the visitor is in the purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutPhase {
    EmptyCart,
    HasItems,
    AwaitingSession,
    Redirected,
}

/// Cart plus checkout, driven by one caller
#[derive(Debug)]
pub struct PurchaseFlow<S: CartStorage, B, N> {
    cart: CartStore<S>,
    initiator: CheckoutInitiator<B>,
    navigator: N,
    phase: CheckoutPhase,
}

impl<S, B, N> PurchaseFlow<S, B, N>
where
    S: CartStorage,
    B: CheckoutBackend,
    N: Navigator,
{
    pub fn new(cart: CartStore<S>, initiator: CheckoutInitiator<B>, navigator: N) -> Self {
        let phase = phase_of(&cart);
        Self {
            cart,
            initiator,
            navigator,
            phase,
        }
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn initiator(&self) -> &CheckoutInitiator<B> {
        &self.initiator
    }

    pub fn add_to_cart(&mut self, item: NewCartItem) {
        self.cart.add_to_cart(item);
        self.sync_phase();
    }

    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        self.cart.update_quantity(product_id, quantity);
        self.sync_phase();
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove_from_cart(product_id);
        self.sync_phase();
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear_cart();
        self.sync_phase();
    }

    /// Check out the whole cart and navigate to the payment page.
    ///
    /// On failure the cart is left exactly as it was.
    pub async fn begin_checkout(&mut self, signed_in: bool, billing: &BillingDetails) -> Result<Url> {
        if !signed_in {
            return Err(CheckoutError::NotSignedIn);
        }
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        billing.validate()?;

        self.phase = CheckoutPhase::AwaitingSession;
        let session = self.initiator.checkout_cart(&self.cart).await;
        self.finish(session)
    }

    /// Buy a single product directly; the cart is not involved
    pub async fn buy_now(&mut self, signed_in: bool, product: &Product) -> Result<Url> {
        if !signed_in {
            return Err(CheckoutError::NotSignedIn);
        }

        self.phase = CheckoutPhase::AwaitingSession;
        let session = self.initiator.buy_now(product).await;
        self.finish(session)
    }

    /// Called once the visitor lands on the success page. Safe to repeat.
    pub fn complete_purchase(&mut self) {
        self.cart.clear_cart();
        self.phase = CheckoutPhase::EmptyCart;
        tracing::info!("Purchase completed, cart cleared");
    }

    fn finish(&mut self, session: Result<CheckoutSession>) -> Result<Url> {
        let outcome = session
            .and_then(|session| self.navigator.navigate(&session.url).map(|()| session.url));

        match outcome {
            Ok(url) => {
                self.phase = CheckoutPhase::Redirected;
                Ok(url)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Checkout did not start; cart left unchanged");
                self.sync_phase();
                Err(e)
            }
        }
    }

    fn sync_phase(&mut self) {
        self.phase = phase_of(&self.cart);
    }
}

fn phase_of<S: CartStorage>(cart: &CartStore<S>) -> CheckoutPhase {
    if cart.is_empty() {
        CheckoutPhase::EmptyCart
    } else {
        CheckoutPhase::HasItems
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use cart_core::{MemoryStorage, ProductCategory, ShoppingItem};

    use super::*;
    use crate::backend::{SessionResponse, SessionStatus};
    use crate::config::CheckoutConfig;

    struct FixedBackend(Option<&'static str>);

    #[async_trait]
    impl CheckoutBackend for FixedBackend {
        async fn create_checkout_session(
            &self,
            _items: &[ShoppingItem],
            _success_url: &str,
            _cancel_url: &str,
        ) -> Result<SessionResponse> {
            self.0
                .map(SessionResponse::new)
                .ok_or_else(|| CheckoutError::SessionCreation("rejected".into()))
        }

        async fn session_status(&self, _session_id: &str) -> Result<SessionStatus> {
            Err(CheckoutError::SessionCreation("unused".into()))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator(Arc<Mutex<Vec<String>>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &Url) -> Result<()> {
            self.0.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn billing() -> BillingDetails {
        BillingDetails {
            full_name: "Asha Rao".into(),
            email: "asha@example.in".into(),
            phone: "9876543210".into(),
            street: "12 MG Road".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            postal_code: "400001".into(),
            ..BillingDetails::default()
        }
    }

    fn flow(
        reply: Option<&'static str>,
    ) -> (PurchaseFlow<MemoryStorage, FixedBackend, RecordingNavigator>, RecordingNavigator) {
        let navigator = RecordingNavigator::default();
        let flow = PurchaseFlow::new(
            CartStore::load(MemoryStorage::new()),
            CheckoutInitiator::new(FixedBackend(reply), CheckoutConfig::default()),
            navigator.clone(),
        );
        (flow, navigator)
    }

    fn laptop() -> NewCartItem {
        NewCartItem::new("P1", "HP Laptop 15", 150_000, "inr")
    }

    #[test]
    fn test_phase_follows_cart() {
        let (mut flow, _) = flow(None);
        assert_eq!(flow.phase(), CheckoutPhase::EmptyCart);

        flow.add_to_cart(laptop());
        assert_eq!(flow.phase(), CheckoutPhase::HasItems);

        flow.update_quantity("P1", 0);
        assert_eq!(flow.phase(), CheckoutPhase::EmptyCart);
    }

    #[tokio::test]
    async fn test_successful_checkout_redirects() {
        let (mut flow, navigator) = flow(Some("https://pay.example/cs_1"));
        flow.add_to_cart(laptop());

        let url = flow.begin_checkout(true, &billing()).await.unwrap();

        assert_eq!(url.as_str(), "https://pay.example/cs_1");
        assert_eq!(flow.phase(), CheckoutPhase::Redirected);
        assert_eq!(*navigator.0.lock().unwrap(), ["https://pay.example/cs_1"]);
        // Cart survives until the success page says otherwise.
        assert_eq!(flow.cart().cart_item_count(), 1);

        flow.complete_purchase();
        assert_eq!(flow.phase(), CheckoutPhase::EmptyCart);
        flow.complete_purchase();
        assert!(flow.cart().is_empty());
    }

    #[tokio::test]
    async fn test_failed_checkout_returns_to_has_items() {
        let (mut flow, navigator) = flow(None);
        flow.add_to_cart(laptop());
        flow.add_to_cart(laptop());
        let before = flow.cart().items().to_vec();

        let error = flow.begin_checkout(true, &billing()).await.unwrap_err();

        assert!(matches!(error, CheckoutError::SessionCreation(_)));
        assert_eq!(flow.phase(), CheckoutPhase::HasItems);
        assert_eq!(flow.cart().items(), before.as_slice());
        assert!(navigator.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gates_checked_before_backend() {
        let (mut flow, _) = flow(Some("https://pay.example/cs_1"));

        assert!(matches!(
            flow.begin_checkout(true, &billing()).await,
            Err(CheckoutError::EmptyCart)
        ));

        flow.add_to_cart(laptop());
        assert!(matches!(
            flow.begin_checkout(false, &billing()).await,
            Err(CheckoutError::NotSignedIn)
        ));
        assert!(matches!(
            flow.begin_checkout(true, &BillingDetails::default()).await,
            Err(CheckoutError::Validation(_))
        ));
        assert_eq!(flow.phase(), CheckoutPhase::HasItems);
    }

    #[tokio::test]
    async fn test_buy_now_leaves_cart_alone() {
        let (mut flow, navigator) = flow(Some("https://pay.example/cs_9"));
        flow.add_to_cart(laptop());

        let mut router = Product {
            id: 4,
            name: "TP-Link WiFi Router".into(),
            description: String::new(),
            category: ProductCategory::Networking,
            is_available: true,
            price: None,
            image_url: None,
        };

        let error = flow.buy_now(true, &router).await.unwrap_err();
        assert!(matches!(error, CheckoutError::Validation(_)));
        assert_eq!(flow.phase(), CheckoutPhase::HasItems);
        assert!(navigator.0.lock().unwrap().is_empty());

        router.price = Some(50_000);
        let url = flow.buy_now(true, &router).await.unwrap();

        assert_eq!(url.as_str(), "https://pay.example/cs_9");
        assert_eq!(flow.phase(), CheckoutPhase::Redirected);
        assert_eq!(flow.cart().cart_item_count(), 1);
    }
}
