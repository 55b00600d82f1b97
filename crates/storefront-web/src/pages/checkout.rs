//! Checkout Page

use cart_checkout::{BillingDetails, CheckoutError};
use cart_core::{DEFAULT_CURRENCY, format_price};
use leptos::prelude::*;

use crate::api;
use crate::components::TextField;
use crate::state::{use_cart, use_notice};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = use_cart();
    let notice = use_notice();
    let pending = RwSignal::new(false);

    let defaults = BillingDetails::default();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let country = RwSignal::new(defaults.country);

    let details = move || BillingDetails {
        full_name: full_name.get_untracked(),
        email: email.get_untracked(),
        phone: phone.get_untracked(),
        street: street.get_untracked(),
        city: city.get_untracked(),
        state: state.get_untracked(),
        postal_code: postal_code.get_untracked(),
        country: country.get_untracked(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        if let Err(e) = details().validate() {
            notice.show(e.user_message());
            return;
        }

        let items = cart.with_untracked(|c| c.shopping_items());
        if items.is_empty() {
            notice.show(CheckoutError::EmptyCart.user_message());
            return;
        }

        pending.set(true);
        leptos::task::spawn_local(async move {
            // On success the browser leaves the page; the cart is cleared on return.
            if let Err(e) = api::start_checkout(&items).await {
                leptos::logging::error!("Checkout failed: {e}");
                notice.show(e.user_message());
            }
            pending.set(false);
        });
    };

    let total = move || {
        cart.with(|c| {
            let currency = c
                .items()
                .first()
                .map_or(DEFAULT_CURRENCY, |item| item.currency.as_str())
                .to_string();
            format_price(c.cart_total(), &currency)
        })
    };

    view! {
        <div class="checkout">
            <h1>"Checkout"</h1>
            <Show
                when=move || cart.with(|c| !c.is_empty())
                fallback=|| view! {
                    <div class="empty">
                        <p>"Your cart is empty"</p>
                        <a href="/" class="btn">"Continue Shopping"</a>
                    </div>
                }
            >
                <div class="checkout-grid">
                    <form class="billing" on:submit=on_submit>
                        <h2>"Billing Details"</h2>
                        <TextField label="Full Name" value=full_name />
                        <TextField label="Email" value=email kind="email" />
                        <TextField label="Phone" value=phone kind="tel" />
                        <TextField label="Street Address" value=street />
                        <TextField label="City" value=city />
                        <TextField label="State" value=state />
                        <TextField label="Postal Code" value=postal_code />
                        <TextField label="Country" value=country />
                        <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                            {move || if pending.get() { "Processing..." } else { "Proceed to Payment" }}
                        </button>
                    </form>

                    <aside class="summary">
                        <h2>"Order Summary"</h2>
                        <For
                            each=move || cart.with(|c| c.items().to_vec())
                            key=|item| (item.product_id.clone(), item.quantity)
                            children=move |item| {
                                let line = format_price(item.line_total(), &item.currency);
                                view! {
                                    <div class="summary-line">
                                        <span>{item.product_name.clone()}" x "{item.quantity}</span>
                                        <span>{line}</span>
                                    </div>
                                }
                            }
                        />
                        <div class="total">
                            <span>"Total"</span>
                            <span>{total}</span>
                        </div>
                    </aside>
                </div>
            </Show>
        </div>
    }
}
