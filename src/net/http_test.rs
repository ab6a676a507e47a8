use super::*;
use futures::executor::block_on;
use serde_json::json;

// =============================================================
// URL and header helpers
// =============================================================

#[test]
fn url_for_prefixes_the_api_base() {
    assert_eq!(url_for("/auth/login"), format!("{}/auth/login", config::api_base()));
}

#[test]
fn bearer_is_absent_without_a_stored_token() {
    assert_eq!(bearer(), None);
}

#[test]
fn bearer_formats_the_stored_token() {
    storage::set(config::TOKEN_KEY, "jwt-abc");
    assert_eq!(bearer(), Some("Bearer jwt-abc".to_owned()));
    storage::remove(config::TOKEN_KEY);
}

#[test]
fn only_token_bearing_requests_can_end_the_session() {
    assert!(ends_session(401, true));
    // A failed login is a 401 without a token; the form renders it inline.
    assert!(!ends_session(401, false));
    assert!(!ends_session(403, true));
    assert!(!ends_session(500, true));
}

#[test]
fn method_maps_to_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// Error body messages
// =============================================================

#[test]
fn server_message_prefers_message_field() {
    let body = json!({ "message": "NRP atau password salah", "error": "unauthorized" });
    assert_eq!(server_message(&body), "NRP atau password salah");
}

#[test]
fn server_message_falls_back_to_error_field() {
    let body = json!({ "error": "Anggota tidak ditemukan" });
    assert_eq!(server_message(&body), "Anggota tidak ditemukan");
}

#[test]
fn server_message_is_empty_for_unknown_bodies() {
    assert_eq!(server_message(&json!({ "detail": "x" })), "");
    assert_eq!(server_message(&json!(null)), "");
}

// =============================================================
// Host transport behavior
// =============================================================

#[test]
fn transport_fails_off_browser_with_a_connection_error() {
    let err = block_on(request_json(Method::Post, "/auth/login", None)).unwrap_err();
    assert!(err.is_connection());

    let err = block_on(get_json("/member/profile")).unwrap_err();
    assert!(err.is_connection());
}
