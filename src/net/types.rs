//! Wire types for the backend REST contract, plus tolerant decoders.
//!
//! DECODING
//! ========
//! The backend's response shapes changed over time without versioning: some
//! deployments wrap payloads in a `{ success, data }` envelope, older ones
//! return the payload flat, and list payloads sit under different field
//! names. Decoders here probe the known shapes in a fixed order and fail
//! with a single `ApiError::UnrecognizedResponse` when none match — never
//! by silently returning an empty value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::net::error::{ApiError, ApiResult};
use crate::session::{Principal, Role};

// =============================================================
// Envelope handling
// =============================================================

/// Strip a `{ success, data }` envelope if present, otherwise return the
/// value unchanged. First step of every decode path.
pub fn strip_envelope(value: &Value) -> &Value {
    match value.get("data") {
        Some(inner) if value.is_object() => inner,
        _ => value,
    }
}

/// Decode `T` from a possibly-enveloped body.
pub fn decode_body<T: DeserializeOwned>(value: &Value) -> ApiResult<T> {
    serde_json::from_value(strip_envelope(value).clone())
        .or_else(|_| serde_json::from_value(value.clone()))
        .map_err(|_| ApiError::UnrecognizedResponse)
}

/// Extract principal and bearer token from a login response.
///
/// Probes the data-envelope shape first, then the flat historical shape.
/// The user object may sit under `user` or `member`.
pub fn extract_login(value: &Value) -> ApiResult<(Principal, String)> {
    for candidate in [strip_envelope(value), value] {
        let token = candidate.get("token").and_then(Value::as_str);
        let user = candidate.get("user").or_else(|| candidate.get("member"));
        if let (Some(token), Some(user)) = (token, user) {
            if let Ok(principal) = serde_json::from_value::<Principal>(user.clone()) {
                return Ok((principal, token.to_owned()));
            }
        }
    }
    Err(ApiError::UnrecognizedResponse)
}

// =============================================================
// Members
// =============================================================

/// Savings balance breakdown for one member.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberSimpanan {
    pub total_simpanan: f64,
    pub simpanan_pokok: f64,
    pub simpanan_wajib: f64,
    pub simpanan_sukarela: f64,
    pub tabungan_hari_raya: f64,
}

impl MemberSimpanan {
    /// Balance of one savings category.
    pub fn category_balance(&self, category: SimpananCategory) -> f64 {
        match category {
            SimpananCategory::Pokok => self.simpanan_pokok,
            SimpananCategory::Wajib => self.simpanan_wajib,
            SimpananCategory::Sukarela => self.simpanan_sukarela,
            SimpananCategory::Thr => self.tabungan_hari_raya,
        }
    }
}

/// Aggregate statistics over a member's savings ledger.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpananStats {
    pub total_transactions: u64,
    pub total_setoran: f64,
    pub total_penarikan: f64,
    pub total_koreksi: f64,
    pub last_transaction_date: Option<String>,
}

/// Financial summary attached to a member detail response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberSummary {
    pub total_piutang: f64,
    pub active_piutang: u64,
    pub completed_piutang: u64,
    pub total_active_piutang_amount: f64,
    pub total_simpanan: f64,
    pub simpanan_transactions: Option<SimpananStats>,
}

/// A cooperative member as returned by list and detail endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub id: String,
    pub nrp: String,
    pub nama: String,
    pub jabatan: String,
    pub role: String,
    pub created_at: String,
    pub join_date: Option<String>,
    pub active_loan_count: u64,
    pub has_active_loan: bool,
    #[serde(deserialize_with = "simpanan_object_or_number")]
    pub simpanan: Option<MemberSimpanan>,
    pub summary: Option<MemberSummary>,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Session principal for this account record.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id.clone(),
            nrp: self.nrp.clone(),
            nama: self.nama.clone(),
            jabatan: self.jabatan.clone(),
            role: if self.is_admin() { Role::Admin } else { Role::Member },
        }
    }

    /// Join date with the older `joinDate` field preferred over `createdAt`.
    pub fn joined(&self) -> &str {
        self.join_date.as_deref().unwrap_or(&self.created_at)
    }

    pub fn total_simpanan(&self) -> f64 {
        self.simpanan.as_ref().map_or(0.0, |s| s.total_simpanan)
    }

    pub fn active_piutang_amount(&self) -> f64 {
        self.summary
            .as_ref()
            .map_or(0.0, |s| s.total_active_piutang_amount)
    }
}

/// Older deployments returned `simpanan` as a bare number instead of the
/// breakdown object; fold that shape into a breakdown with only the total.
fn simpanan_object_or_number<'de, D>(de: D) -> Result<Option<MemberSimpanan>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(de)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(MemberSimpanan {
            total_simpanan: n.as_f64().unwrap_or(0.0),
            ..MemberSimpanan::default()
        }),
        Some(other) => serde_json::from_value(other).ok(),
    })
}

// =============================================================
// Pagination and lists
// =============================================================

/// Page/limit pagination metadata. Field names drifted across backend
/// versions; aliases cover the known spellings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(alias = "totalTransactions", alias = "total")]
    pub total_items: u64,
    #[serde(alias = "limit")]
    pub items_per_page: u32,
    #[serde(alias = "hasNext")]
    pub has_next_page: bool,
    #[serde(alias = "hasPrev")]
    pub has_prev_page: bool,
}

/// One page of the member list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberPage {
    pub members: Vec<Member>,
    pub pagination: Option<Pagination>,
}

/// Decode a member list response: enveloped object with a `members` field,
/// or a bare array in the oldest shape.
pub fn decode_member_page(value: &Value) -> ApiResult<MemberPage> {
    let body = strip_envelope(value);

    if let Some(members) = body.get("members") {
        let members =
            serde_json::from_value(members.clone()).map_err(|_| ApiError::UnrecognizedResponse)?;
        let pagination = body
            .get("pagination")
            .and_then(|p| serde_json::from_value(p.clone()).ok());
        return Ok(MemberPage { members, pagination });
    }

    if body.is_array() {
        let members =
            serde_json::from_value(body.clone()).map_err(|_| ApiError::UnrecognizedResponse)?;
        return Ok(MemberPage { members, pagination: None });
    }

    Err(ApiError::UnrecognizedResponse)
}

// =============================================================
// Transactions
// =============================================================

/// A single ledger transaction (savings or loan side).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "amount_number_or_string")]
    pub amount: f64,
    pub description: String,
    pub category: Option<String>,
    pub created_at: String,
    pub balance_before: Option<f64>,
    pub balance_after: Option<f64>,
}

impl Transaction {
    /// Withdrawals and loan disbursements reduce the member's position.
    pub fn is_debit(&self) -> bool {
        matches!(self.kind.as_str(), "penarikan" | "pinjaman")
    }

    pub fn is_correction(&self) -> bool {
        self.kind == "koreksi"
    }
}

/// The backend emits amounts either as JSON numbers or as decimal strings.
fn amount_number_or_string<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// One page of a transaction history response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub pagination: Option<Pagination>,
    pub statistics: Option<SimpananStats>,
}

pub fn decode_transaction_page(value: &Value) -> ApiResult<TransactionPage> {
    decode_body(value)
}

// =============================================================
// Loans (piutang)
// =============================================================

/// An outstanding or settled loan record.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Piutang {
    pub id: String,
    pub jenis: String,
    pub besar_pinjaman: f64,
    pub total_piutang: f64,
    pub biaya_angsuran: f64,
    pub total_angsuran: u32,
    pub description: String,
    pub created_at: String,
    pub status: Option<String>,
}

/// Decode a loan list: enveloped under `piutang`, or a bare array.
pub fn decode_piutang_list(value: &Value) -> ApiResult<Vec<Piutang>> {
    let body = strip_envelope(value);
    let list = body.get("piutang").unwrap_or(body);
    serde_json::from_value(list.clone()).map_err(|_| ApiError::UnrecognizedResponse)
}

// =============================================================
// Products
// =============================================================

/// A storefront catalog item.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub nama_produk: String,
    pub harga: f64,
    pub deskripsi: String,
    pub nama_kategori: String,
    pub foto: String,
    pub created_at: String,
}

/// One page of the product catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Option<Pagination>,
}

/// Decode a product list: enveloped object with a `products` field, or a
/// bare array.
pub fn decode_product_page(value: &Value) -> ApiResult<ProductPage> {
    let body = strip_envelope(value);

    if let Some(products) = body.get("products") {
        let products =
            serde_json::from_value(products.clone()).map_err(|_| ApiError::UnrecognizedResponse)?;
        let pagination = body
            .get("pagination")
            .and_then(|p| serde_json::from_value(p.clone()).ok());
        return Ok(ProductPage { products, pagination });
    }

    if body.is_array() {
        let products =
            serde_json::from_value(body.clone()).map_err(|_| ApiError::UnrecognizedResponse)?;
        return Ok(ProductPage { products, pagination: None });
    }

    Err(ApiError::UnrecognizedResponse)
}

// =============================================================
// Write payloads
// =============================================================

/// Savings ledger mutation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimpananKind {
    Setoran,
    Penarikan,
    Koreksi,
}

/// Savings ledger categories as the backend spells them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimpananCategory {
    Pokok,
    Wajib,
    Sukarela,
    Thr,
}

impl SimpananCategory {
    pub const ALL: [SimpananCategory; 4] = [
        SimpananCategory::Pokok,
        SimpananCategory::Wajib,
        SimpananCategory::Sukarela,
        SimpananCategory::Thr,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SimpananCategory::Pokok => "Simpanan Pokok",
            SimpananCategory::Wajib => "Simpanan Wajib",
            SimpananCategory::Sukarela => "Simpanan Sukarela",
            SimpananCategory::Thr => "Tabungan Hari Raya",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            SimpananCategory::Pokok => "pokok",
            SimpananCategory::Wajib => "wajib",
            SimpananCategory::Sukarela => "sukarela",
            SimpananCategory::Thr => "thr",
        }
    }

    pub fn from_api_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.api_value() == value)
    }
}

/// Savings ledger mutation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpananUpdate {
    #[serde(rename = "type")]
    pub kind: SimpananKind,
    pub category: SimpananCategory,
    pub amount: f64,
    pub description: String,
}

/// New loan record.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PiutangCreate {
    pub jenis: String,
    pub besar_pinjaman: f64,
    pub total_piutang: f64,
    pub biaya_angsuran: f64,
    pub total_angsuran: u32,
    pub description: String,
}

/// Loan repayment (`payment`) or full settlement (`pelunasan`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PiutangUpdate {
    #[serde(rename = "type")]
    pub kind: PiutangUpdateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PiutangUpdateKind {
    Payment,
    Pelunasan,
}

/// New member registration (admin only).
#[derive(Clone, Debug, Serialize)]
pub struct MemberCreate {
    pub nrp: String,
    pub nama: String,
    pub jabatan: String,
    pub password: String,
}

/// Member field edit (admin only).
#[derive(Clone, Debug, Serialize)]
pub struct MemberUpdate {
    pub nrp: String,
    pub nama: String,
    pub jabatan: String,
}

/// Own password change.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnPasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Admin-side password reset for a member.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

/// Product create/update fields; the photo travels separately as multipart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPayload {
    pub nama_produk: String,
    pub harga: f64,
    pub deskripsi: String,
    pub nama_kategori: String,
}

/// Catalog categories offered by the storefront forms and filter.
pub const PRODUCT_CATEGORIES: [(&str, &str); 5] = [
    ("makanan", "Makanan & Minuman"),
    ("elektronik", "Elektronik"),
    ("rumah-tangga", "Rumah Tangga"),
    ("pakaian", "Pakaian"),
    ("kesehatan", "Kesehatan"),
];
