//! Payment Result Pages

use cart_checkout::SessionStatus;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::api;
use crate::state::use_cart;

/// Landing page after a completed payment; empties the cart
#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let cart = use_cart();
    cart.update(|c| c.clear_cart());

    let query = use_query_map();
    let status = RwSignal::new(None::<String>);

    if let Some(session_id) = query.with_untracked(|q| q.get("session_id")) {
        leptos::task::spawn_local(async move {
            match api::session_status(&session_id).await {
                Ok(SessionStatus::Completed { response, .. }) => status.set(Some(response)),
                Ok(SessionStatus::Failed { error }) => status.set(Some(error)),
                Err(e) => leptos::logging::warn!("Session status unavailable: {e}"),
            }
        });
    }

    view! {
        <div class="payment-result success">
            <h1>"Payment Successful"</h1>
            <p>"Thank you for your purchase. A confirmation has been sent to your email."</p>
            {move || status.get().map(|message| view! { <p class="status">{message}</p> })}
            <a href="/" class="btn">"Continue Shopping"</a>
        </div>
    }
}

/// Landing page after a cancelled or failed payment; the cart is kept
#[component]
pub fn PaymentFailurePage() -> impl IntoView {
    view! {
        <div class="payment-result failure">
            <h1>"Payment Cancelled"</h1>
            <p>"Your payment was not completed. Your cart has been saved."</p>
            <a href="/cart" class="btn">"Back to Cart"</a>
            <a href="/" class="btn">"Continue Shopping"</a>
        </div>
    }
}
