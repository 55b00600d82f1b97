//! Home Page

use cart_core::{Product, format_price, DEFAULT_CURRENCY};
use leptos::prelude::*;

use crate::api;
use crate::state::{use_cart, use_notice};

#[component]
pub fn HomePage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);

    leptos::task::spawn_local(async move {
        products.set(api::load_products().await);
        loading.set(false);
    });

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Our Products & Services"</h1>
                <p class="tagline">"Computers, accessories and networking for home and office"</p>
            </header>

            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">"..."</div> }>
                <section class="products">
                    <For
                        each=move || products.get()
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </section>
                <Show when=move || products.with(Vec::is_empty)>
                    <p class="empty">"No products available at the moment. Please check back later."</p>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let notice = use_notice();
    let buying = RwSignal::new(false);

    let price = product
        .price
        .map(|cents| format_price(u128::from(cents), DEFAULT_CURRENCY));
    let has_price = price.is_some();

    let for_cart = product.clone();
    let add = move |_| match for_cart.to_cart_item() {
        Ok(item) => {
            cart.update(|c| c.add_to_cart(item));
            notice.show(format!("{} added to cart", for_cart.name));
        }
        Err(e) => notice.show(e.to_string()),
    };

    let for_buy = product.clone();
    let buy = move |_| {
        if buying.get_untracked() {
            return;
        }
        buying.set(true);
        let product = for_buy.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api::buy_now(&product).await {
                leptos::logging::error!("Buy now failed: {e}");
                notice.show(e.user_message());
            }
            buying.set(false);
        });
    };

    view! {
        <div class="product">
            {product.image_url.clone().map(|src| view! { <img src=src alt=product.name.clone() /> })}
            <h3>{product.name.clone()}</h3>
            <span class="category">{product.category.as_str().to_string()}</span>
            <p class="description">{product.description.clone()}</p>
            <div class="price">{price.unwrap_or_else(|| "Contact for price".into())}</div>
            <div class="actions">
                <button class="btn" disabled=!has_price on:click=add>"Add to Cart"</button>
                <button
                    class="btn btn-primary"
                    disabled=move || !has_price || buying.get()
                    on:click=buy
                >
                    {move || if buying.get() { "..." } else { "Buy Now" }}
                </button>
            </div>
        </div>
    }
}
