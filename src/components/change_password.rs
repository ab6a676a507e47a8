//! Password change dialog for own account and admin resets.

use leptos::prelude::*;

use crate::components::member_form::validate_password;
use crate::net::api;
use crate::net::types::{AdminPasswordChange, OwnPasswordChange};
use crate::state::toasts::use_toasts;

/// With a `member_id` this performs an admin reset; without one it changes
/// the signed-in account's password and asks for the current one first.
#[component]
pub fn ChangePasswordDialog(
    #[prop(optional)] member_id: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);
    let require_old = member_id.is_none();

    let submit = move |_| {
        if busy.get() {
            return;
        }
        let new_pw = new_password.get();
        let conf = confirm.get();
        if require_old && old_password.get().is_empty() {
            error.set(Some("Password lama wajib diisi".to_owned()));
            return;
        }
        if let Err(message) = validate_password(&new_pw, &conf) {
            error.set(Some(message));
            return;
        }

        busy.set(true);
        error.set(None);
        let member_id = member_id.clone();
        leptos::task::spawn_local(async move {
            let result = match member_id {
                Some(id) => {
                    let payload = AdminPasswordChange {
                        new_password: new_pw,
                        confirm_password: conf,
                    };
                    api::reset_member_password(&id, &payload).await
                }
                None => {
                    let payload = OwnPasswordChange {
                        old_password: old_password.get_untracked(),
                        new_password: new_pw,
                        confirm_password: conf,
                    };
                    api::change_own_password(&payload).await
                }
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Password berhasil diubah");
                    on_close.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="dialog-overlay" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Ubah Password"</h2>
                <Show when=move || require_old>
                    <label class="field">
                        <span class="field__label">"Password Lama"</span>
                        <input
                            class="field__input"
                            type="password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label class="field">
                    <span class="field__label">"Password Baru"</span>
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Konfirmasi Password Baru"</span>
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Batal"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=submit>
                        {move || if busy.get() { "Menyimpan..." } else { "Simpan" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
