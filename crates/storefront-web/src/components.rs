//! UI Components

use cart_core::{CartItem, format_price};
use leptos::prelude::*;

use crate::state::{use_cart, use_notice};

/// Header cart link with a unit-count badge
#[component]
pub fn CartButton() -> impl IntoView {
    let cart = use_cart();
    let count = move || cart.with(|c| c.cart_item_count());

    view! {
        <a href="/cart" class="cart-button">
            "Cart"
            <Show when=move || { count() > 0 }>
                <span class="badge">{count}</span>
            </Show>
        </a>
    }
}

/// One cart line with quantity controls
#[component]
pub fn CartLine(item: CartItem) -> impl IntoView {
    let cart = use_cart();
    let quantity = i64::from(item.quantity);
    let unit_price = format_price(u128::from(item.price_in_cents), &item.currency);
    let line_total = format_price(item.line_total(), &item.currency);

    let id_dec = item.product_id.clone();
    let id_inc = item.product_id.clone();
    let id_del = item.product_id.clone();

    view! {
        <div class="cart-line">
            {item.image_url.clone().map(|src| view! { <img src=src alt=item.product_name.clone() /> })}
            <div class="details">
                <h4>{item.product_name.clone()}</h4>
                <p class="price">{unit_price}</p>
                <div class="quantity">
                    <button on:click=move |_| cart.update(|c| c.update_quantity(&id_dec, quantity - 1))>"-"</button>
                    <span>{item.quantity}</span>
                    <button on:click=move |_| cart.update(|c| c.update_quantity(&id_inc, quantity + 1))>"+"</button>
                    <button class="remove" on:click=move |_| cart.update(|c| c.remove_from_cart(&id_del))>
                        "Remove"
                    </button>
                </div>
            </div>
            <p class="line-total">{line_total}</p>
        </div>
    }
}

/// Toast for the current notice, if any
#[component]
pub fn Toast() -> impl IntoView {
    let notice = use_notice();

    view! {
        <Show when=move || notice.0.with(Option::is_some)>
            <div class="toast" on:click=move |_| notice.dismiss()>
                {move || notice.0.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Labelled text input bound to a signal
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label}" *"</label>
            <input
                type=kind
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
