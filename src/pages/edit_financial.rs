//! Admin ledger editing: savings mutations and loan management.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::api;
use crate::net::types::{
    MemberSimpanan, Piutang, PiutangCreate, PiutangUpdate, PiutangUpdateKind, SimpananCategory,
    SimpananKind, SimpananUpdate,
};
use crate::state::cache::{QueryScope, use_query_cache};
use crate::state::toasts::use_toasts;
use crate::util::format::{date_id, parse_amount, rupiah};
use crate::util::loan::amortize;

#[component]
pub fn EditFinancialPage() -> impl IntoView {
    let params = use_params_map();
    let cache = use_query_cache();

    let member_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let detail = LocalResource::new(move || {
        let _version = cache.version(QueryScope::MemberDetail);
        let id = member_id();
        async move { api::member_detail(&id).await }
    });

    let balances = Signal::derive(move || {
        detail
            .get()
            .and_then(Result::ok)
            .and_then(|member| member.simpanan)
    });

    let loans = LocalResource::new(move || {
        let _version = cache.version(QueryScope::PiutangTransactions);
        let id = member_id();
        async move { api::member_piutang(&id).await }
    });

    view! {
        <div class="financial-page">
            <Suspense fallback=move || view! { <p class="page-loading">"Memuat anggota..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(member) => view! {
                                <header class="financial-page__header">
                                    <a class="financial-page__back" href=format!("/user/{}", member.id)>
                                        "\u{2190} Kembali ke detail anggota"
                                    </a>
                                    <h1>{format!("Kelola Keuangan: {}", member.nama)}</h1>
                                    <p class="financial-page__balance">
                                        {format!("Total simpanan saat ini: {}", rupiah(member.total_simpanan()))}
                                    </p>
                                </header>
                            }
                            .into_any(),
                            Err(err) => {
                                view! { <p class="page-error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <div class="financial-page__columns">
                <SimpananForm member_id=Signal::derive(member_id) balances=balances/>
                <section class="financial-page__loans">
                    <h2>"Piutang"</h2>
                    <Suspense fallback=move || view! { <p class="page-loading">"Memuat piutang..."</p> }>
                        {move || {
                            loans
                                .get()
                                .map(|result| match result {
                                    Ok(list) => view! {
                                        <PiutangList member_id=Signal::derive(member_id) loans=list/>
                                    }
                                    .into_any(),
                                    Err(err) => {
                                        view! { <p class="page-error">{err.to_string()}</p> }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                    <PiutangCreateForm member_id=Signal::derive(member_id)/>
                </section>
            </div>
        </div>
    }
}

/// Savings ledger mutation form: deposit, withdrawal, or correction
/// against one category.
#[component]
fn SimpananForm(
    member_id: Signal<String>,
    balances: Signal<Option<MemberSimpanan>>,
) -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();

    let kind = RwSignal::new(SimpananKind::Setoran);
    let category = RwSignal::new(SimpananCategory::Wajib);
    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    // Current and resulting balance for the selected category; corrections
    // replace the balance outright.
    let balance_preview = move || {
        let current = balances.get()?.category_balance(category.get());
        let value = parse_amount(&amount.get())?;
        let next = match kind.get() {
            SimpananKind::Setoran => current + value,
            SimpananKind::Penarikan => current - value,
            SimpananKind::Koreksi => value,
        };
        Some((current, next))
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(value) = parse_amount(&amount.get()).filter(|v| *v > 0.0) else {
            error.set(Some("Jumlah tidak valid".to_owned()));
            return;
        };
        if kind.get() == SimpananKind::Penarikan {
            if let Some(current) = balances
                .get_untracked()
                .map(|b| b.category_balance(category.get_untracked()))
            {
                if value > current {
                    error.set(Some("Saldo tidak mencukupi untuk penarikan".to_owned()));
                    return;
                }
            }
        }

        let payload = SimpananUpdate {
            kind: kind.get(),
            category: category.get(),
            amount: value,
            description: description.get().trim().to_owned(),
        };
        let id = member_id.get();

        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = api::update_simpanan(&id, &payload).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    cache.invalidate(api::INVALIDATE_SIMPANAN_UPDATE);
                    toasts.success("Transaksi simpanan berhasil dicatat");
                    amount.set(String::new());
                    description.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <section class="financial-page__simpanan">
            <h2>"Simpanan"</h2>
            <form class="simpanan-form" on:submit=submit>
                <label class="field">
                    <span class="field__label">"Jenis Transaksi"</span>
                    <select
                        class="field__input"
                        on:change=move |ev| {
                            kind.set(match event_target_value(&ev).as_str() {
                                "penarikan" => SimpananKind::Penarikan,
                                "koreksi" => SimpananKind::Koreksi,
                                _ => SimpananKind::Setoran,
                            });
                        }
                    >
                        <option value="setoran">"Setoran"</option>
                        <option value="penarikan">"Penarikan"</option>
                        <option value="koreksi">"Koreksi"</option>
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Kategori"</span>
                    <select
                        class="field__input"
                        on:change=move |ev| {
                            if let Some(parsed) =
                                SimpananCategory::from_api_value(&event_target_value(&ev))
                            {
                                category.set(parsed);
                            }
                        }
                    >
                        {SimpananCategory::ALL
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <option
                                        value=c.api_value()
                                        selected=move || category.get() == c
                                    >
                                        {c.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Jumlah"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="65000"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    balance_preview()
                        .map(|(current, next)| view! {
                            <p class="simpanan-form__preview">
                                {format!("Saldo: {} \u{2192} {}", rupiah(current), rupiah(next))}
                            </p>
                        })
                }}
                <label class="field">
                    <span class="field__label">"Keterangan"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Menyimpan..." } else { "Catat Transaksi" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn PiutangList(member_id: Signal<String>, loans: Vec<Piutang>) -> impl IntoView {
    if loans.is_empty() {
        return view! { <p class="piutang-list__empty">"Tidak ada piutang"</p> }.into_any();
    }

    view! {
        <ul class="piutang-list">
            {loans
                .into_iter()
                .map(|loan| view! { <PiutangEntry member_id=member_id loan=loan/> })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
fn PiutangEntry(member_id: Signal<String>, loan: Piutang) -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();
    let show_settle = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let settled = loan.status.as_deref() == Some("lunas") || loan.total_piutang <= 0.0;
    let loan_id = loan.id.clone();
    let installment = loan.biaya_angsuran;

    let update = move |payload: PiutangUpdate| {
        if busy.get_untracked() {
            return;
        }
        let id = member_id.get_untracked();
        let loan_id = loan_id.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = api::update_piutang(&id, &loan_id, &payload).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    cache.invalidate(api::INVALIDATE_PIUTANG_WRITE);
                    toasts.success("Piutang berhasil diperbarui");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    let pay = {
        let update = update.clone();
        move |_| {
            update(PiutangUpdate {
                kind: PiutangUpdateKind::Payment,
                amount: Some(installment),
                description: "Pembayaran angsuran".to_owned(),
            });
        }
    };
    let settle = {
        let update = update.clone();
        Callback::new(move |()| {
            show_settle.set(false);
            update(PiutangUpdate {
                kind: PiutangUpdateKind::Pelunasan,
                amount: None,
                description: "Pelunasan piutang".to_owned(),
            });
        })
    };

    view! {
        <li class="piutang-list__entry">
            <div class="piutang-list__info">
                <span class="piutang-list__jenis">{loan.jenis.clone()}</span>
                <span class="piutang-list__date">{date_id(&loan.created_at)}</span>
                <p class="piutang-list__description">{loan.description.clone()}</p>
            </div>
            <dl class="piutang-list__figures">
                <dt>"Pinjaman"</dt>
                <dd>{rupiah(loan.besar_pinjaman)}</dd>
                <dt>"Sisa"</dt>
                <dd>{rupiah(loan.total_piutang)}</dd>
                <dt>"Angsuran"</dt>
                <dd>{format!("{} \u{00d7} {}", loan.total_angsuran, rupiah(loan.biaya_angsuran))}</dd>
            </dl>
            {if settled {
                view! { <span class="piutang-list__settled">"Lunas"</span> }.into_any()
            } else {
                view! {
                    <div class="piutang-list__actions">
                        <button class="btn btn--ghost" disabled=move || busy.get() on:click=pay>
                            "Bayar Angsuran"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click=move |_| show_settle.set(true)
                        >
                            "Pelunasan"
                        </button>
                    </div>
                }
                .into_any()
            }}
            <Show when=move || show_settle.get()>
                <ConfirmDialog
                    title="Pelunasan Piutang"
                    message="Tandai piutang ini lunas? Sisa piutang akan dinolkan.".to_owned()
                    confirm_label="Pelunasan"
                    on_confirm=settle
                    on_cancel=Callback::new(move |()| show_settle.set(false))
                />
            </Show>
        </li>
    }
}

/// New loan form with a live repayment preview from the annuity formula.
#[component]
fn PiutangCreateForm(member_id: Signal<String>) -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();

    let jenis = RwSignal::new("uang".to_owned());
    let principal = RwSignal::new(String::new());
    let rate = RwSignal::new("12".to_owned());
    let months = RwSignal::new("10".to_owned());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let preview = Memo::new(move |_| {
        let principal = parse_amount(&principal.get())?;
        let rate = rate.get().trim().parse::<f64>().ok()?;
        let months = months.get().trim().parse::<u32>().ok()?;
        amortize(principal, rate, months)
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(amount) = parse_amount(&principal.get()).filter(|v| *v > 0.0) else {
            error.set(Some("Besar pinjaman tidak valid".to_owned()));
            return;
        };
        let Ok(term) = months.get().trim().parse::<u32>() else {
            error.set(Some("Jumlah angsuran tidak valid".to_owned()));
            return;
        };
        let Some(plan) = preview.get() else {
            error.set(Some("Data pinjaman tidak lengkap".to_owned()));
            return;
        };

        let payload = PiutangCreate {
            jenis: jenis.get(),
            besar_pinjaman: amount,
            total_piutang: plan.total_payment,
            biaya_angsuran: plan.monthly_payment,
            total_angsuran: term,
            description: description.get().trim().to_owned(),
        };
        let id = member_id.get();

        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = api::create_piutang(&id, &payload).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    cache.invalidate(api::INVALIDATE_PIUTANG_WRITE);
                    toasts.success("Piutang baru berhasil dicatat");
                    principal.set(String::new());
                    description.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <form class="piutang-form" on:submit=submit>
            <h3>"Piutang Baru"</h3>
            <label class="field">
                <span class="field__label">"Jenis"</span>
                <select class="field__input" on:change=move |ev| jenis.set(event_target_value(&ev))>
                    <option value="uang">"Pinjaman Uang"</option>
                    <option value="barang">"Pinjaman Barang"</option>
                </select>
            </label>
            <label class="field">
                <span class="field__label">"Besar Pinjaman"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="1000000"
                    prop:value=move || principal.get()
                    on:input=move |ev| principal.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Bunga per Tahun (%)"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || rate.get()
                    on:input=move |ev| rate.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Jumlah Angsuran (bulan)"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || months.get()
                    on:input=move |ev| months.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Keterangan"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>

            {move || {
                preview
                    .get()
                    .map(|plan| view! {
                        <dl class="piutang-form__preview">
                            <dt>"Angsuran per Bulan"</dt>
                            <dd>{rupiah(plan.monthly_payment)}</dd>
                            <dt>"Total Pembayaran"</dt>
                            <dd>{rupiah(plan.total_payment)}</dd>
                            <dt>"Total Bunga"</dt>
                            <dd>{rupiah(plan.total_interest)}</dd>
                        </dl>
                    })
            }}

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Menyimpan..." } else { "Catat Piutang" }}
            </button>
        </form>
    }
}
