//! Application shell: root contexts, session restore, and the route table.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::Layout;
use crate::components::protected_route::Protected;
use crate::components::toaster::Toaster;
use crate::config;
use crate::pages::edit_financial::EditFinancialPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::member_detail::MemberDetailPage;
use crate::pages::members::MembersPage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::shop::ShopPage;
use crate::session::provide_session;
use crate::state::cache::provide_query_cache;
use crate::state::toasts::provide_toasts;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = provide_session();
    provide_query_cache();
    provide_toasts();

    // Resolve persisted credentials before the guards settle.
    #[cfg(target_arch = "wasm32")]
    leptos::task::spawn_local(async move {
        session.restore().await;
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = session;

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <Toaster/>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/login") view=LoginPage/>
                <Route
                    path=path!("/")
                    view=|| view! {
                        <Protected>
                            <Layout>
                                <HomePage/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/profile")
                    view=|| view! {
                        <Protected>
                            <Layout>
                                <ProfilePage/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/shop")
                    view=|| view! {
                        <Protected>
                            <Layout>
                                <ShopPage/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/product/:id")
                    view=|| view! {
                        <Protected>
                            <Layout>
                                <ProductDetailPage/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/users")
                    view=|| view! {
                        <Protected admin_only=true>
                            <Layout>
                                <MembersPage/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/register")
                    view=|| view! {
                        <Protected admin_only=true>
                            <Layout>
                                <RegisterPage/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/user/:id")
                    view=|| view! {
                        <Protected admin_only=true>
                            <Layout>
                                <MemberDetailPage/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/edit-financial/:id")
                    view=|| view! {
                        <Protected admin_only=true>
                            <Layout>
                                <EditFinancialPage/>
                            </Layout>
                        </Protected>
                    }
                />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Halaman tidak ditemukan"</p>
            <a class="btn btn--primary" href="/">
                "Kembali ke Beranda"
            </a>
        </div>
    }
}
