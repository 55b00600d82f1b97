//! Cart Page

use cart_core::{DEFAULT_CURRENCY, format_price};
use leptos::prelude::*;

use crate::components::CartLine;
use crate::state::use_cart;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

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

    let summary = move || {
        let lines = cart.with(|c| c.items().len());
        format!("{lines} item{} in your cart", if lines == 1 { "" } else { "s" })
    };

    view! {
        <div class="cart">
            <h1>"Shopping Cart"</h1>
            <Show
                when=move || cart.with(|c| !c.is_empty())
                fallback=|| view! {
                    <div class="empty">
                        <p>"Your cart is empty"</p>
                        <a href="/" class="btn">"Continue Shopping"</a>
                    </div>
                }
            >
                <p class="subtitle">{summary}</p>
                <For
                    each=move || cart.with(|c| c.items().to_vec())
                    key=|item| (item.product_id.clone(), item.quantity)
                    children=move |item| view! { <CartLine item=item /> }
                />
                <div class="total">
                    <span>"Total"</span>
                    <span>{total}</span>
                </div>
                <a href="/checkout" class="btn btn-primary">"Proceed to Checkout"</a>
            </Show>
        </div>
    }
}
