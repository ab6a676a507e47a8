//! Read invalidation for server data.
//!
//! DESIGN
//! ======
//! Server reads are grouped into scopes. Each scope carries a version
//! counter in a reactive map; a fetcher that reads `version(scope)` inside
//! its tracking closure refetches whenever a write bumps that scope. Writes
//! declare which scopes they touch, so stale lists disappear without any
//! page wiring a manual refresh.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

use leptos::prelude::*;

/// One cached read surface. A scope covers every parameterization of the
/// read (all pages of the member list share `Members`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryScope {
    Members,
    MemberDetail,
    OwnProfile,
    SimpananTransactions,
    PiutangTransactions,
    Products,
    ProductDetail,
}

/// Pure version bookkeeping behind the reactive handle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionMap {
    versions: HashMap<QueryScope, u64>,
}

impl VersionMap {
    /// Current version of a scope. Scopes start at zero.
    pub fn version(&self, scope: QueryScope) -> u64 {
        self.versions.get(&scope).copied().unwrap_or(0)
    }

    pub fn invalidate(&mut self, scope: QueryScope) {
        *self.versions.entry(scope).or_insert(0) += 1;
    }
}

/// Copyable handle over the shared version map.
#[derive(Clone, Copy)]
pub struct QueryCache {
    versions: RwSignal<VersionMap>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            versions: RwSignal::new(VersionMap::default()),
        }
    }

    /// Reactive read; call inside a fetcher closure to subscribe.
    pub fn version(&self, scope: QueryScope) -> u64 {
        self.versions.with(|map| map.version(scope))
    }

    /// Bump every scope a completed write touches.
    pub fn invalidate(&self, scopes: &[QueryScope]) {
        self.versions.update(|map| {
            for &scope in scopes {
                map.invalidate(scope);
            }
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_query_cache() -> QueryCache {
    let cache = QueryCache::new();
    provide_context(cache);
    cache
}

pub fn use_query_cache() -> QueryCache {
    expect_context::<QueryCache>()
}
