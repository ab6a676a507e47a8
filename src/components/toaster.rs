//! Fixed overlay rendering the toast queue.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, use_toasts};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__dismiss" on:click=move |_| toasts.dismiss(id)>
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
