//! Transaction history table with pagination controls.

use leptos::prelude::*;

use crate::net::types::{Pagination, Transaction};
use crate::util::format::{date_id, rupiah};

fn kind_class(kind: &str) -> &'static str {
    match kind {
        "setoran" | "pembayaran" => "tx-badge tx-badge--credit",
        "penarikan" | "pinjaman" => "tx-badge tx-badge--debit",
        "koreksi" => "tx-badge tx-badge--correction",
        _ => "tx-badge",
    }
}

#[component]
pub fn TransactionTable(transactions: Vec<Transaction>) -> impl IntoView {
    if transactions.is_empty() {
        return view! {
            <p class="tx-table__empty">"Belum ada transaksi"</p>
        }
        .into_any();
    }

    view! {
        <table class="tx-table">
            <thead>
                <tr>
                    <th>"Tanggal"</th>
                    <th>"Jenis"</th>
                    <th>"Kategori"</th>
                    <th>"Keterangan"</th>
                    <th class="tx-table__amount">"Jumlah"</th>
                </tr>
            </thead>
            <tbody>
                {transactions
                    .into_iter()
                    .map(|tx| {
                        let amount = if tx.is_debit() {
                            format!("-{}", rupiah(tx.amount))
                        } else {
                            rupiah(tx.amount)
                        };
                        let amount_class = if tx.is_debit() {
                            "tx-table__amount tx-table__amount--debit"
                        } else {
                            "tx-table__amount tx-table__amount--credit"
                        };
                        view! {
                            <tr>
                                <td>{date_id(&tx.created_at)}</td>
                                <td>
                                    <span class=kind_class(&tx.kind)>{tx.kind.clone()}</span>
                                </td>
                                <td>{tx.category.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                <td>{tx.description.clone()}</td>
                                <td class=amount_class>{amount}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
pub fn PaginationControls(pagination: Pagination, on_page: Callback<u32>) -> impl IntoView {
    let current = pagination.current_page;
    let label = format!("Halaman {} dari {}", current, pagination.total_pages.max(1));

    view! {
        <div class="pagination">
            <button
                class="btn btn--ghost"
                disabled=!pagination.has_prev_page
                on:click=move |_| on_page.run(current.saturating_sub(1).max(1))
            >
                "Sebelumnya"
            </button>
            <span class="pagination__label">{label}</span>
            <button
                class="btn btn--ghost"
                disabled=!pagination.has_next_page
                on:click=move |_| on_page.run(current + 1)
            >
                "Selanjutnya"
            </button>
        </div>
    }
}
