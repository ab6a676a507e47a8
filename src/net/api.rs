//! Typed operations over the backend REST API.
//!
//! One async function per endpoint, returning decoded wire types. Writes
//! discard their response bodies; the caller refreshes reads through the
//! query cache using the `INVALIDATE_*` scope lists, which mirror what
//! each write changes on the server.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiResult;
use crate::net::http::{self, Method, UploadFile};
use crate::net::types::{
    AdminPasswordChange, Member, MemberCreate, MemberPage, MemberUpdate, OwnPasswordChange,
    Piutang, PiutangCreate, PiutangUpdate, Product, ProductPage, ProductPayload, SimpananUpdate,
    TransactionPage, decode_body, decode_member_page, decode_piutang_list, decode_product_page,
    decode_transaction_page,
};
use crate::state::cache::QueryScope;

/// Which transaction ledger a history read covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionFeed {
    Simpanan,
    Piutang,
    Combined,
}

impl TransactionFeed {
    pub fn segment(self) -> &'static str {
        match self {
            TransactionFeed::Simpanan => "simpanan",
            TransactionFeed::Piutang => "piutang",
            TransactionFeed::Combined => "combined",
        }
    }

    pub fn scope(self) -> QueryScope {
        match self {
            TransactionFeed::Simpanan => QueryScope::SimpananTransactions,
            TransactionFeed::Piutang | TransactionFeed::Combined => {
                QueryScope::PiutangTransactions
            }
        }
    }
}

/// Common pagination/search parameters for list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ListParams {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Query string, always carrying page and limit. Blank search and
    /// category values are omitted rather than sent empty.
    pub fn query(&self) -> String {
        let mut query = format!("?page={}&limit={}", self.page.max(1), crate::config::PAGE_SIZE);
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query.push_str("&search=");
            query.push_str(&paths::encode(search.trim()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            query.push_str("&category=");
            query.push_str(&paths::encode(category));
        }
        query
    }
}

pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const LOGOUT: &str = "/auth/logout";
    pub const OWN_PROFILE: &str = "/member/profile";
    pub const OWN_PASSWORD: &str = "/member/password";
    pub const MEMBERS: &str = "/admin/members";
    pub const ADMIN_PRODUCTS: &str = "/admin/products";
    pub const USER_PRODUCTS: &str = "/user/products";

    pub fn member(id: &str) -> String {
        format!("{MEMBERS}/{}", encode(id))
    }

    pub fn member_password(id: &str) -> String {
        format!("{}/password", member(id))
    }

    pub fn member_simpanan(id: &str) -> String {
        format!("{}/simpanan", member(id))
    }

    pub fn member_piutang(id: &str) -> String {
        format!("{}/piutang", member(id))
    }

    pub fn member_piutang_entry(id: &str, piutang_id: &str) -> String {
        format!("{}/{}", member_piutang(id), encode(piutang_id))
    }

    pub fn member_transactions(id: &str, segment: &str) -> String {
        format!("{}/transactions/{segment}", member(id))
    }

    pub fn own_transactions(segment: &str) -> String {
        format!("/member/me/transactions/{segment}")
    }

    pub fn admin_product(id: &str) -> String {
        format!("{ADMIN_PRODUCTS}/{}", encode(id))
    }

    pub fn user_product(id: &str) -> String {
        format!("{USER_PRODUCTS}/{}", encode(id))
    }

    /// Percent-encode a path segment or query value.
    pub fn encode(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for byte in value.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    out.push(byte as char);
                }
                _ => out.push_str(&format!("%{byte:02X}")),
            }
        }
        out
    }
}

// =============================================================
// Invalidation scopes per write, matching what the server recomputes
// =============================================================

pub const INVALIDATE_MEMBER_WRITE: &[QueryScope] =
    &[QueryScope::Members, QueryScope::MemberDetail];

pub const INVALIDATE_SIMPANAN_UPDATE: &[QueryScope] = &[
    QueryScope::Members,
    QueryScope::MemberDetail,
    QueryScope::OwnProfile,
    QueryScope::SimpananTransactions,
];

pub const INVALIDATE_PIUTANG_WRITE: &[QueryScope] = &[
    QueryScope::Members,
    QueryScope::MemberDetail,
    QueryScope::OwnProfile,
    QueryScope::PiutangTransactions,
];

pub const INVALIDATE_PRODUCT_WRITE: &[QueryScope] =
    &[QueryScope::Products, QueryScope::ProductDetail];

// =============================================================
// Profile
// =============================================================

pub async fn own_profile() -> ApiResult<Member> {
    let body = http::get_json(paths::OWN_PROFILE).await?;
    decode_body(&body)
}

pub async fn change_own_password(payload: &OwnPasswordChange) -> ApiResult<()> {
    write_json(Method::Patch, paths::OWN_PASSWORD, payload).await
}

pub async fn own_transactions(feed: TransactionFeed, page: u32) -> ApiResult<TransactionPage> {
    let path = format!(
        "{}{}",
        paths::own_transactions(feed.segment()),
        ListParams::page(page).query()
    );
    let body = http::get_json(&path).await?;
    decode_transaction_page(&body)
}

// =============================================================
// Members (admin)
// =============================================================

pub async fn members(params: &ListParams) -> ApiResult<MemberPage> {
    let path = format!("{}{}", paths::MEMBERS, params.query());
    let body = http::get_json(&path).await?;
    decode_member_page(&body)
}

pub async fn member_detail(id: &str) -> ApiResult<Member> {
    let body = http::get_json(&paths::member(id)).await?;
    decode_body(&body)
}

pub async fn create_member(payload: &MemberCreate) -> ApiResult<()> {
    write_json(Method::Post, paths::MEMBERS, payload).await
}

pub async fn update_member(id: &str, payload: &MemberUpdate) -> ApiResult<()> {
    write_json(Method::Put, &paths::member(id), payload).await
}

pub async fn delete_member(id: &str) -> ApiResult<()> {
    http::request_json(Method::Delete, &paths::member(id), None)
        .await
        .map(|_| ())
}

pub async fn reset_member_password(id: &str, payload: &AdminPasswordChange) -> ApiResult<()> {
    write_json(Method::Patch, &paths::member_password(id), payload).await
}

pub async fn member_transactions(
    id: &str,
    feed: TransactionFeed,
    page: u32,
) -> ApiResult<TransactionPage> {
    let path = format!(
        "{}{}",
        paths::member_transactions(id, feed.segment()),
        ListParams::page(page).query()
    );
    let body = http::get_json(&path).await?;
    decode_transaction_page(&body)
}

// =============================================================
// Financial records (admin)
// =============================================================

pub async fn update_simpanan(id: &str, payload: &SimpananUpdate) -> ApiResult<()> {
    write_json(Method::Patch, &paths::member_simpanan(id), payload).await
}

pub async fn member_piutang(id: &str) -> ApiResult<Vec<Piutang>> {
    let body = http::get_json(&paths::member_piutang(id)).await?;
    decode_piutang_list(&body)
}

pub async fn create_piutang(id: &str, payload: &PiutangCreate) -> ApiResult<()> {
    write_json(Method::Post, &paths::member_piutang(id), payload).await
}

pub async fn update_piutang(id: &str, piutang_id: &str, payload: &PiutangUpdate) -> ApiResult<()> {
    write_json(
        Method::Patch,
        &paths::member_piutang_entry(id, piutang_id),
        payload,
    )
    .await
}

// =============================================================
// Products
// =============================================================

pub async fn products(params: &ListParams) -> ApiResult<ProductPage> {
    let path = format!("{}{}", paths::USER_PRODUCTS, params.query());
    let body = http::get_json(&path).await?;
    decode_product_page(&body)
}

pub async fn product_detail(id: &str) -> ApiResult<Product> {
    let body = http::get_json(&paths::user_product(id)).await?;
    decode_body(&body)
}

pub async fn create_product(payload: &ProductPayload, photo: Option<UploadFile>) -> ApiResult<()> {
    http::request_multipart(
        Method::Post,
        paths::ADMIN_PRODUCTS,
        product_fields(payload),
        photo,
    )
    .await
    .map(|_| ())
}

pub async fn update_product(
    id: &str,
    payload: &ProductPayload,
    photo: Option<UploadFile>,
) -> ApiResult<()> {
    http::request_multipart(
        Method::Put,
        &paths::admin_product(id),
        product_fields(payload),
        photo,
    )
    .await
    .map(|_| ())
}

pub async fn delete_product(id: &str) -> ApiResult<()> {
    http::request_json(Method::Delete, &paths::admin_product(id), None)
        .await
        .map(|_| ())
}

fn product_fields(payload: &ProductPayload) -> Vec<(&'static str, String)> {
    vec![
        ("namaProduk", payload.nama_produk.clone()),
        ("harga", payload.harga.to_string()),
        ("deskripsi", payload.deskripsi.clone()),
        ("namaKategori", payload.nama_kategori.clone()),
    ]
}

async fn write_json<T: serde::Serialize>(method: Method, path: &str, payload: &T) -> ApiResult<()> {
    let body = serde_json::to_value(payload)
        .map_err(|err| crate::net::error::ApiError::Network(err.to_string()))?;
    http::request_json(method, path, Some(&body)).await.map(|_| ())
}
