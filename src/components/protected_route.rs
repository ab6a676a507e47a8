//! Route guard wrapper around protected page content.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::{GuardDecision, RouteRequirement, decide, use_session};

/// Gates its children on the session state.
///
/// While the session is still being restored this renders a spinner, never
/// a redirect; bouncing a refreshed tab through `/login` would lose the
/// page the user was on.
#[component]
pub fn Protected(
    #[prop(optional)] admin_only: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let requirement = if admin_only {
        RouteRequirement::AdminOnly
    } else {
        RouteRequirement::Authenticated
    };

    move || match decide(&session.state(), requirement) {
        GuardDecision::Loading => view! {
            <div class="guard-loading">
                <div class="guard-loading__spinner"></div>
                <p>"Memuat..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
        GuardDecision::RedirectHome => view! { <Redirect path="/"/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
