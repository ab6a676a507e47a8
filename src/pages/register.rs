//! Admin form for registering a new member.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::member_form::{MemberFields, validate_identity, validate_password};
use crate::net::api;
use crate::net::types::MemberCreate;
use crate::state::cache::use_query_cache;
use crate::state::toasts::use_toasts;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let nrp = RwSignal::new(String::new());
    let nama = RwSignal::new(String::new());
    let jabatan = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let check = validate_identity(&nrp.get(), &nama.get(), &jabatan.get())
            .and_then(|()| validate_password(&password.get(), &confirm.get()));
        if let Err(message) = check {
            error.set(Some(message));
            return;
        }

        let payload = MemberCreate {
            nrp: nrp.get().trim().to_owned(),
            nama: nama.get().trim().to_owned(),
            jabatan: jabatan.get().trim().to_owned(),
            password: password.get(),
        };

        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::create_member(&payload).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    cache.invalidate(api::INVALIDATE_MEMBER_WRITE);
                    toasts.success("Anggota baru berhasil didaftarkan");
                    navigate("/users", NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="register-page">
            <h1>"Tambah Anggota"</h1>
            <form class="register-page__form" on:submit=submit>
                <MemberFields nrp=nrp nama=nama jabatan=jabatan/>
                <label class="field">
                    <span class="field__label">"Password"</span>
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Konfirmasi Password"</span>
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <div class="register-page__actions">
                    <a class="btn btn--ghost" href="/users">
                        "Batal"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Menyimpan..." } else { "Daftarkan" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
