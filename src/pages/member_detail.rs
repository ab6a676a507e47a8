//! Admin view of one member: identity, balances, and ledgers.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::change_password::ChangePasswordDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::member_form::{MemberFields, validate_identity};
use crate::components::transactions::{PaginationControls, TransactionTable};
use crate::net::api::{self, TransactionFeed};
use crate::net::types::{Member, MemberUpdate};
use crate::pages::profile::SimpananCards;
use crate::state::cache::{QueryScope, use_query_cache};
use crate::state::toasts::use_toasts;
use crate::util::format::{date_id, rupiah};

#[component]
pub fn MemberDetailPage() -> impl IntoView {
    let params = use_params_map();
    let cache = use_query_cache();

    let member_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let detail = LocalResource::new(move || {
        let _version = cache.version(QueryScope::MemberDetail);
        let id = member_id();
        async move { api::member_detail(&id).await }
    });

    let feed = RwSignal::new(TransactionFeed::Combined);
    let page = RwSignal::new(1u32);

    let history = LocalResource::new(move || {
        let _version = cache.version(feed.get().scope());
        let id = member_id();
        let feed = feed.get();
        let page = page.get();
        async move { api::member_transactions(&id, feed, page).await }
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
        <div class="member-page">
            <a class="member-page__back" href="/users">
                "\u{2190} Kembali ke daftar anggota"
            </a>

            <Suspense fallback=move || view! { <p class="page-loading">"Memuat anggota..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(member) => view! { <MemberDetail member=member/> }.into_any(),
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="member-page__history">
                <h2>"Riwayat Transaksi"</h2>
                <div class="tabs">
                    <button class=move || tab_class(TransactionFeed::Combined)
                        on:click=move |_| select_feed(TransactionFeed::Combined)>
                        "Semua"
                    </button>
                    <button class=move || tab_class(TransactionFeed::Simpanan)
                        on:click=move |_| select_feed(TransactionFeed::Simpanan)>
                        "Simpanan"
                    </button>
                    <button class=move || tab_class(TransactionFeed::Piutang)
                        on:click=move |_| select_feed(TransactionFeed::Piutang)>
                        "Piutang"
                    </button>
                </div>

                <Suspense fallback=move || view! { <p class="page-loading">"Memuat transaksi..."</p> }>
                    {move || {
                        history
                            .get()
                            .map(|result| match result {
                                Ok(history) => view! {
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
        </div>
    }
}

#[component]
fn MemberDetail(member: Member) -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let editing = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let show_delete = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let id = member.id.clone();
    let nrp = RwSignal::new(member.nrp.clone());
    let nama = RwSignal::new(member.nama.clone());
    let jabatan = RwSignal::new(member.jabatan.clone());

    let summary = member.summary.clone().unwrap_or_default();
    let simpanan = member.simpanan.clone().unwrap_or_default();
    let financial = format!("/edit-financial/{}", member.id);

    let save = {
        let id = id.clone();
        move |_| {
            if busy.get() {
                return;
            }
            if let Err(message) = validate_identity(&nrp.get(), &nama.get(), &jabatan.get()) {
                error.set(Some(message));
                return;
            }
            let payload = MemberUpdate {
                nrp: nrp.get().trim().to_owned(),
                nama: nama.get().trim().to_owned(),
                jabatan: jabatan.get().trim().to_owned(),
            };
            let id = id.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let result = api::update_member(&id, &payload).await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        cache.invalidate(api::INVALIDATE_MEMBER_WRITE);
                        toasts.success("Data anggota berhasil diperbarui");
                        editing.set(false);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    let on_delete = {
        let id = id.clone();
        Callback::new(move |()| {
            let id = id.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::delete_member(&id).await {
                    Ok(()) => {
                        cache.invalidate(api::INVALIDATE_MEMBER_WRITE);
                        toasts.success("Anggota berhasil dihapus");
                        navigate("/users", NavigateOptions::default());
                    }
                    Err(err) => toasts.error(err.to_string()),
                }
            });
        })
    };

    let password_id = id.clone();
    let delete_name = member.nama.clone();
    let identity = member.clone();

    view! {
        <section class="member-card">
            <header class="member-card__header">
                <h1>{member.nama.clone()}</h1>
                <div class="member-card__actions">
                    <A href=financial attr:class="btn btn--primary">
                        "Kelola Simpanan & Piutang"
                    </A>
                    <button class="btn btn--ghost" on:click=move |_| show_password.set(true)>
                        "Reset Password"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                        "Hapus"
                    </button>
                </div>
            </header>

            <Show
                when=move || editing.get()
                fallback={
                    move || {
                        view! {
                            <dl class="member-card__identity">
                                <dt>"NRP"</dt>
                                <dd>{identity.nrp.clone()}</dd>
                                <dt>"Jabatan"</dt>
                                <dd>{identity.jabatan.clone()}</dd>
                                <dt>"Anggota Sejak"</dt>
                                <dd>{date_id(identity.joined())}</dd>
                            </dl>
                            <button class="btn btn--ghost" on:click=move |_| editing.set(true)>
                                "Edit Data"
                            </button>
                        }
                    }
                }
            >
                <div class="member-card__form">
                    <MemberFields nrp=nrp nama=nama jabatan=jabatan/>
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <div class="member-card__form-actions">
                        <button class="btn btn--ghost" on:click=move |_| editing.set(false)>
                            "Batal"
                        </button>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=save.clone()>
                            {move || if busy.get() { "Menyimpan..." } else { "Simpan" }}
                        </button>
                    </div>
                </div>
            </Show>

            <SimpananCards simpanan=simpanan/>

            <div class="member-card__loans">
                <div class="member-card__loan-stat">
                    <span>"Piutang Aktif"</span>
                    <strong>{summary.active_piutang}</strong>
                </div>
                <div class="member-card__loan-stat">
                    <span>"Piutang Lunas"</span>
                    <strong>{summary.completed_piutang}</strong>
                </div>
                <div class="member-card__loan-stat">
                    <span>"Sisa Piutang"</span>
                    <strong>{rupiah(summary.total_active_piutang_amount)}</strong>
                </div>
            </div>

            <Show when=move || show_password.get()>
                <ChangePasswordDialog
                    member_id=password_id.clone()
                    on_close=Callback::new(move |()| show_password.set(false))
                />
            </Show>
            <Show when=move || show_delete.get()>
                <ConfirmDialog
                    title="Hapus Anggota"
                    message=format!("Hapus anggota \"{delete_name}\" beserta seluruh datanya?")
                    confirm_label="Hapus"
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                />
            </Show>
        </section>
    }
}
