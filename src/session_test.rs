use super::*;
use futures::executor::block_on;

fn member_session() -> SessionState {
    SessionState::Authenticated(Session {
        principal: Principal {
            id: "u1".to_owned(),
            nrp: "75010101".to_owned(),
            nama: "Budi".to_owned(),
            jabatan: "Brigadir".to_owned(),
            role: Role::Member,
        },
        token: "jwt".to_owned(),
    })
}

fn admin_session() -> SessionState {
    SessionState::Authenticated(Session {
        principal: Principal {
            role: Role::Admin,
            ..Principal::default()
        },
        token: "jwt".to_owned(),
    })
}

fn in_scope<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.set();
    f()
}

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parses_admin_and_defaults_unknown_to_member() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"member\"").unwrap(), Role::Member);
    assert_eq!(serde_json::from_str::<Role>("\"bendahara\"").unwrap(), Role::Member);
}

#[test]
fn principal_tolerates_missing_fields() {
    let principal: Principal = serde_json::from_str("{\"nrp\": \"75010101\"}").unwrap();
    assert_eq!(principal.nrp, "75010101");
    assert!(!principal.is_admin());
}

// =============================================================
// Guard decision table
// =============================================================

#[test]
fn public_routes_always_render() {
    for state in [SessionState::Unknown, SessionState::Anonymous, admin_session()] {
        assert_eq!(
            decide(&state, RouteRequirement::Public),
            GuardDecision::Render
        );
    }
}

#[test]
fn unknown_state_renders_loading_never_a_redirect() {
    assert_eq!(
        decide(&SessionState::Unknown, RouteRequirement::Authenticated),
        GuardDecision::Loading
    );
    assert_eq!(
        decide(&SessionState::Unknown, RouteRequirement::AdminOnly),
        GuardDecision::Loading
    );
}

#[test]
fn anonymous_is_sent_to_login() {
    assert_eq!(
        decide(&SessionState::Anonymous, RouteRequirement::Authenticated),
        GuardDecision::RedirectLogin
    );
    assert_eq!(
        decide(&SessionState::Anonymous, RouteRequirement::AdminOnly),
        GuardDecision::RedirectLogin
    );
}

#[test]
fn members_render_authenticated_but_not_admin_routes() {
    let state = member_session();
    assert_eq!(
        decide(&state, RouteRequirement::Authenticated),
        GuardDecision::Render
    );
    assert_eq!(
        decide(&state, RouteRequirement::AdminOnly),
        GuardDecision::RedirectHome
    );
}

#[test]
fn admins_render_everything() {
    let state = admin_session();
    assert_eq!(
        decide(&state, RouteRequirement::Authenticated),
        GuardDecision::Render
    );
    assert_eq!(
        decide(&state, RouteRequirement::AdminOnly),
        GuardDecision::Render
    );
}

// =============================================================
// Service state machine (transport is unavailable off-browser, so
// every server call fails with a connection error)
// =============================================================

#[test]
fn failed_login_leaves_the_state_untouched() {
    in_scope(|| {
        let service = SessionService::new();
        let result = block_on(service.login("75010101", "rahasia"));
        assert!(result.unwrap_err().is_connection());
        assert_eq!(service.state(), SessionState::Unknown);
        assert_eq!(service.principal(), None);
    });
}

#[test]
fn logout_clears_the_session_even_when_the_server_is_unreachable() {
    in_scope(|| {
        let service = SessionService::new();
        block_on(service.logout());
        assert_eq!(service.state(), SessionState::Anonymous);
        assert!(!service.is_admin());
    });
}

#[test]
fn restore_without_stored_credentials_is_anonymous() {
    in_scope(|| {
        let service = SessionService::new();
        block_on(service.restore());
        assert_eq!(service.state(), SessionState::Anonymous);
    });
}

#[test]
fn restore_clears_a_token_it_cannot_vouch_for() {
    // A stored token without a cached principal cannot be kept on faith;
    // the failed profile check must leave storage empty.
    in_scope(|| {
        storage::set(config::TOKEN_KEY, "jwt-stale");
        let service = SessionService::new();
        block_on(service.restore());
        assert_eq!(service.state(), SessionState::Anonymous);
        assert_eq!(storage::get(config::TOKEN_KEY), None);
        assert_eq!(storage::get(config::PRINCIPAL_KEY), None);
    });
}

#[test]
fn restore_keeps_the_cached_principal_when_the_server_is_unreachable() {
    in_scope(|| {
        let principal = Principal {
            id: "u1".to_owned(),
            nrp: "75010101".to_owned(),
            nama: "Budi".to_owned(),
            jabatan: "Brigadir".to_owned(),
            role: Role::Admin,
        };
        storage::set(config::TOKEN_KEY, "jwt");
        storage::set(
            config::PRINCIPAL_KEY,
            &serde_json::to_string(&principal).unwrap(),
        );

        let service = SessionService::new();
        block_on(service.restore());
        assert!(service.is_admin());
        assert_eq!(service.principal(), Some(principal));
        // The token survives for the next attempt.
        assert_eq!(storage::get(config::TOKEN_KEY), Some("jwt".to_owned()));
    });
}

#[test]
fn logout_wipes_stored_credentials() {
    in_scope(|| {
        storage::set(config::TOKEN_KEY, "jwt");
        storage::set(config::PRINCIPAL_KEY, "{}");
        let service = SessionService::new();
        block_on(service.logout());
        assert_eq!(storage::get(config::TOKEN_KEY), None);
        assert_eq!(storage::get(config::PRINCIPAL_KEY), None);
    });
}
