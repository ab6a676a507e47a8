//! Catalog card linking to a product's detail page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Product;
use crate::util::format::rupiah;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let detail = format!("/product/{}", product.id);
    let photo = if product.foto.is_empty() {
        None
    } else {
        Some(product.foto.clone())
    };

    view! {
        <A href=detail attr:class="product-card">
            {match photo {
                Some(src) => view! {
                    <img class="product-card__photo" src=src alt=product.nama_produk.clone()/>
                }
                .into_any(),
                None => view! { <div class="product-card__photo product-card__photo--empty"></div> }
                    .into_any(),
            }}
            <div class="product-card__body">
                <span class="product-card__category">{product.nama_kategori.clone()}</span>
                <h3 class="product-card__name">{product.nama_produk.clone()}</h3>
                <span class="product-card__price">{rupiah(product.harga)}</span>
            </div>
        </A>
    }
}
