use super::*;

// =============================================================
// Path builders
// =============================================================

#[test]
fn member_paths_nest_under_admin() {
    assert_eq!(paths::member("abc123"), "/admin/members/abc123");
    assert_eq!(paths::member_password("abc123"), "/admin/members/abc123/password");
    assert_eq!(paths::member_simpanan("abc123"), "/admin/members/abc123/simpanan");
    assert_eq!(
        paths::member_piutang_entry("abc123", "p9"),
        "/admin/members/abc123/piutang/p9"
    );
    assert_eq!(
        paths::member_transactions("abc123", "simpanan"),
        "/admin/members/abc123/transactions/simpanan"
    );
}

#[test]
fn own_transaction_paths_use_the_me_prefix() {
    assert_eq!(
        paths::own_transactions("combined"),
        "/member/me/transactions/combined"
    );
}

#[test]
fn own_password_change_is_member_scoped() {
    assert_eq!(paths::OWN_PASSWORD, "/member/password");
}

#[test]
fn product_paths_split_admin_and_user_views() {
    assert_eq!(paths::admin_product("x1"), "/admin/products/x1");
    assert_eq!(paths::user_product("x1"), "/user/products/x1");
}

#[test]
fn path_ids_are_percent_encoded() {
    assert_eq!(paths::member("a/b c"), "/admin/members/a%2Fb%20c");
}

// =============================================================
// Query building
// =============================================================

#[test]
fn list_query_always_carries_page_and_limit() {
    assert_eq!(ListParams::page(3).query(), "?page=3&limit=10");
}

#[test]
fn list_query_clamps_page_to_one() {
    assert_eq!(ListParams::page(0).query(), "?page=1&limit=10");
}

#[test]
fn list_query_omits_blank_search_and_category() {
    let params = ListParams {
        page: 1,
        search: Some("   ".to_owned()),
        category: Some(String::new()),
    };
    assert_eq!(params.query(), "?page=1&limit=10");
}

#[test]
fn list_query_encodes_search_terms() {
    let params = ListParams {
        page: 2,
        search: Some("budi santoso".to_owned()),
        category: Some("rumah-tangga".to_owned()),
    };
    assert_eq!(
        params.query(),
        "?page=2&limit=10&search=budi%20santoso&category=rumah-tangga"
    );
}

// =============================================================
// Feeds and invalidation scopes
// =============================================================

#[test]
fn transaction_feed_segments_match_the_api() {
    assert_eq!(TransactionFeed::Simpanan.segment(), "simpanan");
    assert_eq!(TransactionFeed::Piutang.segment(), "piutang");
    assert_eq!(TransactionFeed::Combined.segment(), "combined");
}

#[test]
fn simpanan_writes_invalidate_balances_and_history() {
    for scope in [
        QueryScope::Members,
        QueryScope::MemberDetail,
        QueryScope::OwnProfile,
        QueryScope::SimpananTransactions,
    ] {
        assert!(INVALIDATE_SIMPANAN_UPDATE.contains(&scope));
    }
    assert!(!INVALIDATE_SIMPANAN_UPDATE.contains(&QueryScope::Products));
}

#[test]
fn piutang_writes_do_not_touch_the_savings_feed() {
    assert!(INVALIDATE_PIUTANG_WRITE.contains(&QueryScope::PiutangTransactions));
    assert!(!INVALIDATE_PIUTANG_WRITE.contains(&QueryScope::SimpananTransactions));
}

#[test]
fn product_writes_invalidate_both_catalog_views() {
    assert_eq!(
        INVALIDATE_PRODUCT_WRITE,
        &[QueryScope::Products, QueryScope::ProductDetail]
    );
}
