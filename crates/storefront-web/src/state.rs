//! Shared UI State

use cart_core::CartStore;
use leptos::prelude::*;

use crate::storage::BrowserStorage;

/// The visitor's cart, shared through context
pub type CartSignal = RwSignal<CartStore<BrowserStorage>>;

/// Transient message shown to the visitor (the toast)
#[derive(Clone, Copy)]
pub struct Notice(pub RwSignal<Option<String>>);

impl Notice {
    pub fn show(&self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }

    pub fn dismiss(&self) {
        self.0.set(None);
    }
}

/// Create the cart for this page load and make it available to every page
pub fn provide_state() {
    provide_context::<CartSignal>(RwSignal::new(CartStore::load(BrowserStorage)));
    provide_context(Notice(RwSignal::new(None)));
}

pub fn use_cart() -> CartSignal {
    expect_context::<CartSignal>()
}

pub fn use_notice() -> Notice {
    expect_context::<Notice>()
}
