//! Own profile: identity, savings balances, and transaction history.

use leptos::prelude::*;

use crate::components::change_password::ChangePasswordDialog;
use crate::components::transactions::{PaginationControls, TransactionTable};
use crate::net::api::{self, TransactionFeed};
use crate::net::types::{Member, MemberSimpanan, SimpananStats};
use crate::state::cache::{QueryScope, use_query_cache};
use crate::util::format::{date_id, rupiah};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let cache = use_query_cache();
    let show_password = RwSignal::new(false);

    let profile = LocalResource::new(move || {
        let _version = cache.version(QueryScope::OwnProfile);
        async move { api::own_profile().await }
    });

    let feed = RwSignal::new(TransactionFeed::Simpanan);
    let page = RwSignal::new(1u32);

    let history = LocalResource::new(move || {
        let _version = cache.version(feed.get().scope());
        let feed = feed.get();
        let page = page.get();
        async move { api::own_transactions(feed, page).await }
    });

    let select_feed = move |next: TransactionFeed| {
        feed.set(next);
        page.set(1);
    };
    let on_page = Callback::new(move |next: u32| page.set(next));

    let tab_class = move |tab: TransactionFeed| {
        if feed.get() == tab {
            "tabs__tab tabs__tab--active"
        } else {
            "tabs__tab"
        }
    };

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Profil Saya"</h1>
                <button class="btn btn--ghost" on:click=move |_| show_password.set(true)>
                    "Ubah Password"
                </button>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Memuat profil..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(member) => view! { <ProfileSummary member=member/> }.into_any(),
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="profile-page__history">
                <h2>"Riwayat Transaksi"</h2>
                <div class="tabs">
                    <button class=move || tab_class(TransactionFeed::Simpanan)
                        on:click=move |_| select_feed(TransactionFeed::Simpanan)>
                        "Simpanan"
                    </button>
                    <button class=move || tab_class(TransactionFeed::Piutang)
                        on:click=move |_| select_feed(TransactionFeed::Piutang)>
                        "Piutang"
                    </button>
                    <button class=move || tab_class(TransactionFeed::Combined)
                        on:click=move |_| select_feed(TransactionFeed::Combined)>
                        "Semua"
                    </button>
                </div>

                <Suspense fallback=move || view! { <p class="page-loading">"Memuat transaksi..."</p> }>
                    {move || {
                        history
                            .get()
                            .map(|result| match result {
                                Ok(history) => view! {
                                    {history
                                        .statistics
                                        .map(|stats| view! { <LedgerStats stats=stats/> })}
                                    <TransactionTable transactions=history.transactions/>
                                    {history
                                        .pagination
                                        .map(|pagination| view! {
                                            <PaginationControls pagination=pagination on_page=on_page/>
                                        })}
                                }
                                .into_any(),
                                Err(err) => {
                                    view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <Show when=move || show_password.get()>
                <ChangePasswordDialog on_close=Callback::new(move |()| show_password.set(false))/>
            </Show>
        </div>
    }
}

/// Identity card plus the savings balance breakdown.
#[component]
fn ProfileSummary(member: Member) -> impl IntoView {
    let simpanan = member.simpanan.clone().unwrap_or_default();

    view! {
        <section class="profile-card">
            <div class="profile-card__identity">
                <h2>{member.nama.clone()}</h2>
                <dl>
                    <dt>"NRP"</dt>
                    <dd>{member.nrp.clone()}</dd>
                    <dt>"Jabatan"</dt>
                    <dd>{member.jabatan.clone()}</dd>
                    <dt>"Anggota Sejak"</dt>
                    <dd>{date_id(member.joined())}</dd>
                </dl>
            </div>
            <SimpananCards simpanan=simpanan/>
        </section>
    }
}

/// Aggregate figures shown above a savings ledger.
#[component]
fn LedgerStats(stats: SimpananStats) -> impl IntoView {
    view! {
        <div class="ledger-stats">
            <span>{format!("{} transaksi", stats.total_transactions)}</span>
            <span>{format!("Setoran {}", rupiah(stats.total_setoran))}</span>
            <span>{format!("Penarikan {}", rupiah(stats.total_penarikan))}</span>
            {stats
                .last_transaction_date
                .map(|date| view! {
                    <span>{format!("Transaksi terakhir {}", date_id(&date))}</span>
                })}
        </div>
    }
}

#[component]
pub fn SimpananCards(simpanan: MemberSimpanan) -> impl IntoView {
    view! {
        <div class="simpanan-cards">
            <div class="simpanan-cards__card simpanan-cards__card--total">
                <span class="simpanan-cards__label">"Total Simpanan"</span>
                <span class="simpanan-cards__value">{rupiah(simpanan.total_simpanan)}</span>
            </div>
            <div class="simpanan-cards__card">
                <span class="simpanan-cards__label">"Simpanan Pokok"</span>
                <span class="simpanan-cards__value">{rupiah(simpanan.simpanan_pokok)}</span>
            </div>
            <div class="simpanan-cards__card">
                <span class="simpanan-cards__label">"Simpanan Wajib"</span>
                <span class="simpanan-cards__value">{rupiah(simpanan.simpanan_wajib)}</span>
            </div>
            <div class="simpanan-cards__card">
                <span class="simpanan-cards__label">"Simpanan Sukarela"</span>
                <span class="simpanan-cards__value">{rupiah(simpanan.simpanan_sukarela)}</span>
            </div>
            <div class="simpanan-cards__card">
                <span class="simpanan-cards__label">"Tabungan Hari Raya"</span>
                <span class="simpanan-cards__value">{rupiah(simpanan.tabungan_hari_raya)}</span>
            </div>
        </div>
    }
}
