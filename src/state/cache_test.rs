use super::*;

// =============================================================
// VersionMap
// =============================================================

#[test]
fn scopes_start_at_version_zero() {
    let map = VersionMap::default();
    assert_eq!(map.version(QueryScope::Members), 0);
    assert_eq!(map.version(QueryScope::Products), 0);
}

#[test]
fn invalidate_bumps_only_the_named_scope() {
    let mut map = VersionMap::default();
    map.invalidate(QueryScope::MemberDetail);
    map.invalidate(QueryScope::MemberDetail);
    map.invalidate(QueryScope::OwnProfile);

    assert_eq!(map.version(QueryScope::MemberDetail), 2);
    assert_eq!(map.version(QueryScope::OwnProfile), 1);
    assert_eq!(map.version(QueryScope::Members), 0);
}

#[test]
fn repeated_invalidation_keeps_versions_monotonic() {
    let mut map = VersionMap::default();
    let mut seen = Vec::new();
    for _ in 0..4 {
        map.invalidate(QueryScope::Products);
        seen.push(map.version(QueryScope::Products));
    }
    assert_eq!(seen, vec![1, 2, 3, 4]);
}
