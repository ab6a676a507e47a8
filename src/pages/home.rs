//! Landing dashboard after login.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::{self, ListParams};
use crate::session::use_session;
use crate::state::cache::{QueryScope, use_query_cache};
use crate::util::format::{date_id, rupiah};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let cache = use_query_cache();

    let is_admin = move || session.is_admin();

    let profile = LocalResource::new(move || {
        let _version = cache.version(QueryScope::OwnProfile);
        async move { api::own_profile().await }
    });

    view! {
        <div class="home-page">
            <Suspense fallback=move || view! { <p class="page-loading">"Memuat..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(member) => {
                                let summary = member.summary.clone().unwrap_or_default();
                                view! {
                                    <header class="home-page__header">
                                        <h1>{format!("Selamat Datang, {}", member.nama)}</h1>
                                        <p>
                                            {format!(
                                                "{} \u{00b7} NRP {} \u{00b7} Anggota sejak {}",
                                                member.jabatan,
                                                member.nrp,
                                                date_id(member.joined()),
                                            )}
                                        </p>
                                    </header>
                                    <div class="home-page__stats">
                                        <div class="stat-card">
                                            <span class="stat-card__label">"Total Simpanan"</span>
                                            <span class="stat-card__value">
                                                {rupiah(member.total_simpanan())}
                                            </span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__label">"Sisa Piutang"</span>
                                            <span class="stat-card__value">
                                                {rupiah(summary.total_active_piutang_amount)}
                                            </span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__label">"Piutang Aktif"</span>
                                            <span class="stat-card__value">
                                                {summary.active_piutang}
                                            </span>
                                        </div>
                                    </div>
                                }
                                .into_any()
                            }
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=is_admin>
                <AdminCounts/>
            </Show>

            <div class="home-page__cards">
                <A href="/profile" attr:class="home-card">
                    <h3>"Profil Saya"</h3>
                    <p>"Data anggota, saldo simpanan, dan riwayat transaksi"</p>
                </A>
                <A href="/shop" attr:class="home-card">
                    <h3>"Toko Koperasi"</h3>
                    <p>"Katalog barang yang tersedia di koperasi"</p>
                </A>
                <Show when=is_admin>
                    <A href="/users" attr:class="home-card home-card--admin">
                        <h3>"Kelola Anggota"</h3>
                        <p>"Daftar anggota, simpanan, dan piutang"</p>
                    </A>
                </Show>
            </div>
        </div>
    }
}

/// Member and product totals, read from the first page of each listing.
#[component]
fn AdminCounts() -> impl IntoView {
    let cache = use_query_cache();

    let members = LocalResource::new(move || {
        let _version = cache.version(QueryScope::Members);
        async move { api::members(&ListParams::page(1)).await }
    });
    let products = LocalResource::new(move || {
        let _version = cache.version(QueryScope::Products);
        async move { api::products(&ListParams::page(1)).await }
    });

    view! {
        <div class="home-page__stats home-page__stats--admin">
            <Suspense fallback=move || view! { <p class="page-loading">"Memuat..."</p> }>
                {move || {
                    members
                        .get()
                        .and_then(Result::ok)
                        .map(|page| {
                            let total = page
                                .pagination
                                .map_or(page.members.len() as u64, |p| p.total_items);
                            view! {
                                <div class="stat-card stat-card--admin">
                                    <span class="stat-card__label">"Jumlah Anggota"</span>
                                    <span class="stat-card__value">{total}</span>
                                </div>
                            }
                        })
                }}
                {move || {
                    products
                        .get()
                        .and_then(Result::ok)
                        .map(|page| {
                            let total = page
                                .pagination
                                .map_or(page.products.len() as u64, |p| p.total_items);
                            view! {
                                <div class="stat-card stat-card--admin">
                                    <span class="stat-card__label">"Jumlah Produk"</span>
                                    <span class="stat-card__value">{total}</span>
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
