//! Product create/edit dialog with a multipart photo upload.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::UploadFile;
use crate::net::types::{PRODUCT_CATEGORIES, Product, ProductPayload};
use crate::state::cache::use_query_cache;
use crate::state::toasts::use_toasts;
use crate::util::format::parse_amount;

/// Create dialog when `existing` is absent, edit dialog otherwise. The
/// photo is optional both ways; an edit without a new photo keeps the
/// stored one.
#[component]
pub fn ProductFormDialog(
    #[prop(optional)] existing: Option<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let cache = use_query_cache();

    let editing = existing.as_ref().map(|p| p.id.clone());
    let nama = RwSignal::new(existing.as_ref().map(|p| p.nama_produk.clone()).unwrap_or_default());
    let harga = RwSignal::new(
        existing
            .as_ref()
            .map(|p| {
                // Rupiah prices are whole numbers well under the i64 range.
                #[allow(clippy::cast_possible_truncation)]
                let whole = p.harga.trunc() as i64;
                whole.to_string()
            })
            .unwrap_or_default(),
    );
    let deskripsi =
        RwSignal::new(existing.as_ref().map(|p| p.deskripsi.clone()).unwrap_or_default());
    let kategori = RwSignal::new(
        existing
            .as_ref()
            .map(|p| p.nama_kategori.clone())
            .unwrap_or_else(|| PRODUCT_CATEGORIES[0].0.to_owned()),
    );
    let photo: RwSignal<Option<UploadFile>, LocalStorage> = RwSignal::new_local(None);
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let title = if editing.is_some() { "Edit Produk" } else { "Tambah Produk" };

    let on_photo = move |ev: leptos::ev::Event| {
        #[cfg(target_arch = "wasm32")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            photo.set(input.files().and_then(|files| files.get(0)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ev;
    };

    let submit = move |_| {
        if busy.get() {
            return;
        }
        let nama_produk = nama.get().trim().to_owned();
        if nama_produk.is_empty() {
            error.set(Some("Nama produk wajib diisi".to_owned()));
            return;
        }
        let Some(price) = parse_amount(&harga.get()).filter(|p| *p > 0.0) else {
            error.set(Some("Harga tidak valid".to_owned()));
            return;
        };

        let payload = ProductPayload {
            nama_produk,
            harga: price,
            deskripsi: deskripsi.get().trim().to_owned(),
            nama_kategori: kategori.get(),
        };
        let editing = editing.clone();

        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let file = photo.get_untracked();
            let result = match editing {
                Some(id) => api::update_product(&id, &payload, file).await,
                None => api::create_product(&payload, file).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    cache.invalidate(api::INVALIDATE_PRODUCT_WRITE);
                    toasts.success("Produk berhasil disimpan");
                    on_close.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="dialog-overlay" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>
                <label class="field">
                    <span class="field__label">"Nama Produk"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || nama.get()
                        on:input=move |ev| nama.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Harga"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="65000"
                        prop:value=move || harga.get()
                        on:input=move |ev| harga.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Kategori"</span>
                    <select
                        class="field__input"
                        on:change=move |ev| kategori.set(event_target_value(&ev))
                    >
                        {PRODUCT_CATEGORIES
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option value=value selected=move || kategori.get() == value>
                                        {label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Deskripsi"</span>
                    <textarea
                        class="field__input field__input--area"
                        prop:value=move || deskripsi.get()
                        on:input=move |ev| deskripsi.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    <span class="field__label">"Foto"</span>
                    <input class="field__input" type="file" accept="image/*" on:change=on_photo/>
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
