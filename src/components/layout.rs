//! Shared page chrome: top navigation bar with role-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::config;
use crate::session::use_session;

/// Navigation bar and content frame for every protected page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let name = move || session.principal().map(|p| p.nama).unwrap_or_default();
    let is_admin = move || session.is_admin();

    let menu_open = RwSignal::new(false);
    let confirm_logout = RwSignal::new(false);

    let do_logout = Callback::new(move |()| {
        confirm_logout.set(false);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            navigate("/login", NavigateOptions::default());
        });
    });

    view! {
        <div class="layout">
            <header class="navbar">
                <A href="/" attr:class="navbar__brand">
                    {config::APP_NAME}
                </A>
                <button
                    class="navbar__toggle"
                    aria-label="Menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
                <nav
                    class="navbar__links"
                    class:navbar__links--open=move || menu_open.get()
                    on:click=move |_| menu_open.set(false)
                >
                    <A href="/" attr:class="navbar__link">"Beranda"</A>
                    <A href="/shop" attr:class="navbar__link">"Toko"</A>
                    <Show when=is_admin>
                        <A href="/users" attr:class="navbar__link">"Anggota"</A>
                    </Show>
                    <A href="/profile" attr:class="navbar__link">"Profil"</A>
                </nav>
                <div class="navbar__session">
                    <span class="navbar__user">{name}</span>
                    <button class="btn btn--ghost" on:click=move |_| confirm_logout.set(true)>
                        "Keluar"
                    </button>
                </div>
            </header>
            <main class="layout__content">{children()}</main>
            <Show when=move || confirm_logout.get()>
                <ConfirmDialog
                    title="Keluar"
                    message="Keluar dari aplikasi?".to_owned()
                    confirm_label="Keluar"
                    on_confirm=do_logout
                    on_cancel=Callback::new(move |()| confirm_logout.set(false))
                />
            </Show>
        </div>
    }
}
