//! Single product view with admin edit and delete actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::product_form::ProductFormDialog;
use crate::net::api;
use crate::net::types::Product;
use crate::session::use_session;
use crate::state::cache::{QueryScope, use_query_cache};
use crate::state::toasts::use_toasts;
use crate::util::format::{date_id, rupiah};

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();
    let cache = use_query_cache();

    let product_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let product = LocalResource::new(move || {
        let _version = cache.version(QueryScope::ProductDetail);
        let id = product_id();
        async move { api::product_detail(&id).await }
    });

    view! {
        <div class="product-page">
            <a class="product-page__back" href="/shop">
                "\u{2190} Kembali ke toko"
            </a>
            <Suspense fallback=move || view! { <p class="page-loading">"Memuat produk..."</p> }>
                {move || {
                    product
                        .get()
                        .map(|result| match result {
                            Ok(product) => view! {
                                <ProductDetail product=product admin=session.is_admin()/>
                            }
                            .into_any(),
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProductDetail(product: Product, admin: bool) -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let show_edit = RwSignal::new(false);
    let show_delete = RwSignal::new(false);

    let id = product.id.clone();
    let name = product.nama_produk.clone();
    let edit_copy = product.clone();

    let on_delete = Callback::new(move |()| {
        let id = id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    cache.invalidate(api::INVALIDATE_PRODUCT_WRITE);
                    toasts.success("Produk berhasil dihapus");
                    navigate("/shop", NavigateOptions::default());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <article class="product-page__detail">
            {if product.foto.is_empty() {
                view! { <div class="product-page__photo product-page__photo--empty"></div> }
                    .into_any()
            } else {
                view! {
                    <img class="product-page__photo" src=product.foto.clone() alt=product.nama_produk.clone()/>
                }
                .into_any()
            }}
            <div class="product-page__info">
                <span class="product-page__category">{product.nama_kategori.clone()}</span>
                <h1>{product.nama_produk.clone()}</h1>
                <p class="product-page__price">{rupiah(product.harga)}</p>
                <p class="product-page__description">{product.deskripsi.clone()}</p>
                <p class="product-page__since">
                    {format!("Ditambahkan {}", date_id(&product.created_at))}
                </p>
                <Show when=move || admin>
                    <div class="product-page__actions">
                        <button class="btn btn--primary" on:click=move |_| show_edit.set(true)>
                            "Edit"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                            "Hapus"
                        </button>
                    </div>
                </Show>
            </div>

            <Show when=move || show_edit.get()>
                <ProductFormDialog
                    existing=edit_copy.clone()
                    on_close=Callback::new(move |()| show_edit.set(false))
                />
            </Show>
            <Show when=move || show_delete.get()>
                <ConfirmDialog
                    title="Hapus Produk"
                    message=format!("Hapus produk \"{name}\" dari katalog?")
                    confirm_label="Hapus"
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                />
            </Show>
        </article>
    }
}
