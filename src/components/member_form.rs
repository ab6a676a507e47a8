//! Identity form fields and validation shared by member create and edit.

#[cfg(test)]
#[path = "member_form_test.rs"]
mod member_form_test;

use leptos::prelude::*;

/// Validate identity fields, returning the first problem found.
pub fn validate_identity(nrp: &str, nama: &str, jabatan: &str) -> Result<(), String> {
    let nrp = nrp.trim();
    if nrp.is_empty() {
        return Err("NRP wajib diisi".to_owned());
    }
    if !nrp.chars().all(|c| c.is_ascii_digit()) {
        return Err("NRP hanya boleh berisi angka".to_owned());
    }
    if nama.trim().is_empty() {
        return Err("Nama wajib diisi".to_owned());
    }
    if jabatan.trim().is_empty() {
        return Err("Jabatan wajib diisi".to_owned());
    }
    Ok(())
}

/// Validate a new password and its confirmation.
pub fn validate_password(password: &str, confirm: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password minimal 6 karakter".to_owned());
    }
    if password != confirm {
        return Err("Konfirmasi password tidak cocok".to_owned());
    }
    Ok(())
}

#[component]
pub fn MemberFields(
    nrp: RwSignal<String>,
    nama: RwSignal<String>,
    jabatan: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">"NRP"</span>
            <input
                class="field__input"
                type="text"
                prop:value=move || nrp.get()
                on:input=move |ev| nrp.set(event_target_value(&ev))
            />
        </label>
        <label class="field">
            <span class="field__label">"Nama"</span>
            <input
                class="field__input"
                type="text"
                prop:value=move || nama.get()
                on:input=move |ev| nama.set(event_target_value(&ev))
            />
        </label>
        <label class="field">
            <span class="field__label">"Jabatan"</span>
            <input
                class="field__input"
                type="text"
                prop:value=move || jabatan.get()
                on:input=move |ev| jabatan.set(event_target_value(&ev))
            />
        </label>
    }
}
