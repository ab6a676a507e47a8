//! Admin member directory with search and pagination.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::transactions::PaginationControls;
use crate::net::api::{self, ListParams};
use crate::state::cache::{QueryScope, use_query_cache};
use crate::state::toasts::use_toasts;
use crate::util::format::{date_id, rupiah};

#[component]
pub fn MembersPage() -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();

    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    // (id, nama) of the row awaiting delete confirmation.
    let delete_target = RwSignal::new(Option::<(String, String)>::None);

    let members = LocalResource::new(move || {
        let _version = cache.version(QueryScope::Members);
        let params = ListParams {
            page: page.get(),
            search: Some(search.get()),
            category: None,
        };
        async move { api::members(&params).await }
    });

    let on_search = move |ev: leptos::ev::Event| {
        search.set(event_target_value(&ev));
        page.set(1);
    };
    let on_page = Callback::new(move |next: u32| page.set(next));

    let on_delete = Callback::new(move |()| {
        let Some((id, _)) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_member(&id).await {
                Ok(()) => {
                    cache.invalidate(api::INVALIDATE_MEMBER_WRITE);
                    toasts.success("Anggota berhasil dihapus");
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="members-page">
            <header class="members-page__header">
                <h1>"Daftar Anggota"</h1>
                <A href="/register" attr:class="btn btn--primary">
                    "+ Tambah Anggota"
                </A>
            </header>

            <input
                class="field__input members-page__search"
                type="search"
                placeholder="Cari nama atau NRP..."
                prop:value=move || search.get()
                on:input=on_search
            />

            <Suspense fallback=move || view! { <p class="page-loading">"Memuat anggota..."</p> }>
                {move || {
                    members
                        .get()
                        .map(|result| match result {
                            Ok(listing) => {
                                if listing.members.is_empty() {
                                    view! { <p class="members-page__empty">"Tidak ada anggota"</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <table class="members-table">
                                            <thead>
                                                <tr>
                                                    <th>"NRP"</th>
                                                    <th>"Nama"</th>
                                                    <th>"Jabatan"</th>
                                                    <th>"Bergabung"</th>
                                                    <th class="members-table__amount">"Total Simpanan"</th>
                                                    <th>"Pinjaman"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {listing
                                                    .members
                                                    .into_iter()
                                                    .map(|member| {
                                                        let detail = format!("/user/{}", member.id);
                                                        let loan = if member.has_active_loan {
                                                            format!("{} aktif", member.active_loan_count)
                                                        } else {
                                                            "-".to_owned()
                                                        };
                                                        let target = (member.id.clone(), member.nama.clone());
                                                        // The link children close over `nrp`, so pull the
                                                        // fields out before the row borrows `member` again.
                                                        let nrp = member.nrp.clone();
                                                        let admin = member.is_admin();
                                                        view! {
                                                            <tr>
                                                                <td>
                                                                    <A href=detail attr:class="members-table__link">
                                                                        {nrp}
                                                                    </A>
                                                                    {admin
                                                                        .then(|| view! {
                                                                            <span class="role-badge">"admin"</span>
                                                                        })}
                                                                </td>
                                                                <td>{member.nama.clone()}</td>
                                                                <td>{member.jabatan.clone()}</td>
                                                                <td>{date_id(member.joined())}</td>
                                                                <td class="members-table__amount">
                                                                    {rupiah(member.total_simpanan())}
                                                                </td>
                                                                <td>{loan}</td>
                                                                <td>
                                                                    <button
                                                                        class="btn btn--danger btn--small"
                                                                        on:click=move |_| delete_target.set(Some(target.clone()))
                                                                    >
                                                                        "Hapus"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                        {listing
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

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    delete_target
                        .get()
                        .map(|(_, nama)| view! {
                            <ConfirmDialog
                                title="Hapus Anggota"
                                message=format!("Hapus anggota \"{nama}\" beserta seluruh datanya?")
                                confirm_label="Hapus"
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| delete_target.set(None))
                            />
                        })
                }}
            </Show>
        </div>
    }
}
