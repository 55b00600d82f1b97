//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{CartButton, Toast};
use crate::pages::{CartPage, CheckoutPage, HomePage, PaymentFailurePage, PaymentSuccessPage};
use crate::state::provide_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_state();

    view! {
        <Router>
            <header class="site-header">
                <a href="/" class="brand">"PC Computer"</a>
                <CartButton />
            </header>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                    <Route path=path!("/payment-success") view=PaymentSuccessPage />
                    <Route path=path!("/payment-failure") view=PaymentFailurePage />
                </Routes>
            </main>
            <Toast />
        </Router>
    }
}
