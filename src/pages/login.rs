//! Login page with NRP and password credentials.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config;
use crate::session::{SessionState, use_session};
use crate::util::storage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let nrp = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    // One-shot notice left behind by a forced logout.
    let flash = RwSignal::new(storage::take(config::FLASH_KEY));

    // Already signed in: straight to the dashboard.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if let SessionState::Authenticated(_) = session.state() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let nrp_value = nrp.get().trim().to_owned();
        let password_value = password.get();
        if nrp_value.is_empty() || password_value.is_empty() {
            error.set(Some("NRP dan password wajib diisi".to_owned()));
            return;
        }

        busy.set(true);
        error.set(None);
        flash.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session.login(&nrp_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1 class="login-page__title">{config::APP_NAME}</h1>
                <p class="login-page__subtitle">"Masuk dengan akun anggota Anda"</p>

                {move || {
                    flash
                        .get()
                        .map(|notice| view! { <p class="login-page__notice">{notice}</p> })
                }}

                <form class="login-page__form" on:submit=submit>
                    <label class="field">
                        <span class="field__label">"NRP"</span>
                        <input
                            class="field__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || nrp.get()
                            on:input=move |ev| nrp.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <div class="field__password">
                            <input
                                class="field__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="field__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Sembunyikan" } else { "Lihat" }}
                            </button>
                        </div>
                    </label>
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Masuk..." } else { "Masuk" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
