//! Session lifecycle and route guarding.
//!
//! DESIGN
//! ======
//! The session lives in one `RwSignal<SessionState>` provided at the app
//! root; views and guards read it reactively through the copyable
//! `SessionService` handle. The state machine has three positions:
//!
//!   Unknown        startup, restore still in flight
//!   Anonymous      no usable credentials
//!   Authenticated  principal plus bearer token
//!
//! Guard decisions are computed by the pure `decide` function so the
//! whole routing table is testable without a browser. `Unknown` always
//! renders a loading view rather than redirecting; a refresh on a
//! protected page must not bounce through `/login` while the stored
//! token is still being verified.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config;
use crate::net::error::ApiResult;
use crate::net::http::{self, Method};
use crate::net::{api, types};
use crate::util::storage;

/// Account role; anything the backend sends that is not `admin` is
/// treated as a plain member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Member,
}

/// The authenticated account as stored alongside the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Principal {
    pub id: String,
    pub nrp: String,
    pub nama: String,
    pub jabatan: String,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub principal: Principal,
    pub token: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Session),
}

/// Access level a route demands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    Public,
    Authenticated,
    AdminOnly,
}

/// What the guard renders for one (state, requirement) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Render,
    RedirectLogin,
    RedirectHome,
}

/// Pure routing guard table.
pub fn decide(state: &SessionState, requirement: RouteRequirement) -> GuardDecision {
    match (state, requirement) {
        (_, RouteRequirement::Public) => GuardDecision::Render,
        (SessionState::Unknown, _) => GuardDecision::Loading,
        (SessionState::Anonymous, _) => GuardDecision::RedirectLogin,
        (SessionState::Authenticated(session), RouteRequirement::AdminOnly) => {
            if session.principal.is_admin() {
                GuardDecision::Render
            } else {
                GuardDecision::RedirectHome
            }
        }
        (SessionState::Authenticated(_), RouteRequirement::Authenticated) => GuardDecision::Render,
    }
}

/// Copyable handle over the shared session signal.
#[derive(Clone, Copy)]
pub struct SessionService {
    state: RwSignal<SessionState>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Unknown),
        }
    }

    /// Reactive snapshot of the session state.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn principal(&self) -> Option<Principal> {
        self.state.with(|state| match state {
            SessionState::Authenticated(session) => Some(session.principal.clone()),
            _ => None,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.principal().is_some_and(|p| p.is_admin())
    }

    /// Exchange credentials for a session. On success the token and
    /// principal are persisted and the state flips to `Authenticated`;
    /// on failure the state is left untouched.
    pub async fn login(&self, nrp: &str, password: &str) -> ApiResult<Principal> {
        let body = json!({ "nrp": nrp, "password": password });
        let response = http::request_json(Method::Post, api::paths::LOGIN, Some(&body)).await?;
        let (principal, token) = types::extract_login(&response)?;

        storage::set(config::TOKEN_KEY, &token);
        persist_principal(&principal);
        self.state.set(SessionState::Authenticated(Session {
            principal: principal.clone(),
            token,
        }));
        Ok(principal)
    }

    /// End the session. The server call is best effort; local credentials
    /// are cleared no matter what it returns.
    pub async fn logout(&self) {
        let _ = http::request_json(Method::Post, api::paths::LOGOUT, None).await;
        storage::remove(config::TOKEN_KEY);
        storage::remove(config::PRINCIPAL_KEY);
        self.state.set(SessionState::Anonymous);
    }

    /// Resolve `Unknown` at startup from persisted credentials.
    ///
    /// With a stored token the profile endpoint decides: success refreshes
    /// the principal, a credential failure clears everything. A transport
    /// failure keeps the cached principal so a flaky connection does not
    /// log the user out.
    pub async fn restore(&self) {
        let Some(token) = storage::get(config::TOKEN_KEY) else {
            self.state.set(SessionState::Anonymous);
            return;
        };
        let cached: Option<Principal> = storage::get(config::PRINCIPAL_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());

        match api::own_profile().await {
            Ok(member) => {
                let principal = member.principal();
                persist_principal(&principal);
                self.state
                    .set(SessionState::Authenticated(Session { principal, token }));
            }
            Err(err) if err.is_connection() && cached.is_some() => {
                let principal = cached.unwrap_or_default();
                self.state
                    .set(SessionState::Authenticated(Session { principal, token }));
            }
            Err(_) => {
                storage::remove(config::TOKEN_KEY);
                storage::remove(config::PRINCIPAL_KEY);
                self.state.set(SessionState::Anonymous);
            }
        }
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

fn persist_principal(principal: &Principal) {
    if let Ok(raw) = serde_json::to_string(principal) {
        storage::set(config::PRINCIPAL_KEY, &raw);
    }
}

pub fn provide_session() -> SessionService {
    let session = SessionService::new();
    provide_context(session);
    session
}

pub fn use_session() -> SessionService {
    expect_context::<SessionService>()
}
