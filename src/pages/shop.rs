//! Storefront catalog with search, category filter, and pagination.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::product_form::ProductFormDialog;
use crate::components::transactions::PaginationControls;
use crate::net::api::{self, ListParams};
use crate::net::types::PRODUCT_CATEGORIES;
use crate::session::use_session;
use crate::state::cache::{QueryScope, use_query_cache};

#[component]
pub fn ShopPage() -> impl IntoView {
    let session = use_session();
    let cache = use_query_cache();

    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let products = LocalResource::new(move || {
        let _version = cache.version(QueryScope::Products);
        let params = ListParams {
            page: page.get(),
            search: Some(search.get()),
            category: Some(category.get()),
        };
        async move { api::products(&params).await }
    });

    let on_search = move |ev: leptos::ev::Event| {
        search.set(event_target_value(&ev));
        page.set(1);
    };
    let on_category = move |ev: leptos::ev::Event| {
        category.set(event_target_value(&ev));
        page.set(1);
    };
    let on_page = Callback::new(move |next: u32| page.set(next));

    view! {
        <div class="shop-page">
            <header class="shop-page__header">
                <h1>"Toko Koperasi"</h1>
                <Show when=move || session.is_admin()>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ Tambah Produk"
                    </button>
                </Show>
            </header>

            <div class="shop-page__filters">
                <input
                    class="field__input shop-page__search"
                    type="search"
                    placeholder="Cari produk..."
                    prop:value=move || search.get()
                    on:input=on_search
                />
                <select class="field__input shop-page__category" on:change=on_category>
                    <option value="" selected=move || category.get().is_empty()>
                        "Semua Kategori"
                    </option>
                    {PRODUCT_CATEGORIES
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=value selected=move || category.get() == value>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <Suspense fallback=move || view! { <p class="page-loading">"Memuat produk..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|result| match result {
                            Ok(catalog) => {
                                if catalog.products.is_empty() {
                                    view! { <p class="shop-page__empty">"Tidak ada produk"</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="shop-page__grid">
                                            {catalog
                                                .products
                                                .into_iter()
                                                .map(|product| view! { <ProductCard product=product/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        {catalog
                                            .pagination
                                            .map(|pagination| view! {
                                                <PaginationControls pagination=pagination on_page=on_page/>
                                            })}
                                    }
                                    .into_any()
                                }
                            }
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <ProductFormDialog on_close=Callback::new(move |()| show_create.set(false))/>
            </Show>
        </div>
    }
}
