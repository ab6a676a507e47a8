use super::*;

// =============================================================
// API base selection
// =============================================================

#[test]
fn api_base_uses_dev_proxy_in_debug_builds() {
    if cfg!(debug_assertions) {
        assert_eq!(api_base(), "/api");
    } else {
        assert!(api_base().starts_with("https://"));
    }
}

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(TOKEN_KEY, PRINCIPAL_KEY);
    assert_ne!(TOKEN_KEY, FLASH_KEY);
    assert_ne!(PRINCIPAL_KEY, FLASH_KEY);
}
