use super::*;
use serde_json::json;

// =============================================================
// Envelope stripping
// =============================================================

#[test]
fn strip_envelope_unwraps_data_field() {
    let body = json!({ "success": true, "data": { "id": "1" } });
    assert_eq!(strip_envelope(&body), &json!({ "id": "1" }));
}

#[test]
fn strip_envelope_passes_flat_bodies_through() {
    let body = json!({ "id": "1", "nama": "Budi" });
    assert_eq!(strip_envelope(&body), &body);
}

// =============================================================
// Login extraction
// =============================================================

#[test]
fn extract_login_reads_enveloped_shape() {
    let body = json!({
        "success": true,
        "data": {
            "token": "jwt-abc",
            "user": { "id": "u1", "nrp": "75010101", "nama": "Budi", "jabatan": "Brigadir", "role": "member" }
        }
    });
    let (principal, token) = extract_login(&body).unwrap();
    assert_eq!(token, "jwt-abc");
    assert_eq!(principal.nrp, "75010101");
    assert!(!principal.is_admin());
}

#[test]
fn extract_login_reads_flat_shape_with_member_field() {
    let body = json!({
        "token": "jwt-xyz",
        "member": { "id": "u2", "nrp": "75010102", "nama": "Sari", "jabatan": "Bendahara", "role": "admin" }
    });
    let (principal, token) = extract_login(&body).unwrap();
    assert_eq!(token, "jwt-xyz");
    assert!(principal.is_admin());
}

#[test]
fn extract_login_rejects_unknown_shapes() {
    let body = json!({ "success": true, "data": { "session": "nope" } });
    assert_eq!(extract_login(&body), Err(ApiError::UnrecognizedResponse));
}

#[test]
fn extract_login_rejects_token_without_user() {
    let body = json!({ "token": "jwt-abc" });
    assert_eq!(extract_login(&body), Err(ApiError::UnrecognizedResponse));
}

// =============================================================
// Member decoding
// =============================================================

#[test]
fn member_page_decodes_enveloped_object() {
    let body = json!({
        "success": true,
        "data": {
            "members": [
                { "id": "u1", "nrp": "75010101", "nama": "Budi", "jabatan": "Brigadir", "role": "member" }
            ],
            "pagination": { "currentPage": 1, "totalPages": 3, "totalItems": 25, "limit": 10, "hasNextPage": true, "hasPrevPage": false }
        }
    });
    let page = decode_member_page(&body).unwrap();
    assert_eq!(page.members.len(), 1);
    let pagination = page.pagination.unwrap();
    assert_eq!(pagination.total_items, 25);
    assert_eq!(pagination.items_per_page, 10);
    assert!(pagination.has_next_page);
}

#[test]
fn member_page_decodes_bare_array() {
    let body = json!([
        { "id": "u1", "nrp": "75010101", "nama": "Budi", "jabatan": "Brigadir", "role": "member" }
    ]);
    let page = decode_member_page(&body).unwrap();
    assert_eq!(page.members[0].nama, "Budi");
    assert!(page.pagination.is_none());
}

#[test]
fn member_page_rejects_unknown_shape() {
    let body = json!({ "rows": [] });
    assert_eq!(decode_member_page(&body), Err(ApiError::UnrecognizedResponse));
}

#[test]
fn member_admin_flag_follows_role() {
    let admin: Member = serde_json::from_value(json!({
        "id": "u1", "nrp": "75010101", "nama": "Sari", "jabatan": "Bendahara", "role": "admin"
    }))
    .unwrap();
    assert!(admin.is_admin());

    let regular: Member = serde_json::from_value(json!({
        "id": "u2", "nrp": "75010102", "nama": "Budi", "jabatan": "Brigadir", "role": "member"
    }))
    .unwrap();
    assert!(!regular.is_admin());
}

#[test]
fn member_simpanan_accepts_breakdown_object() {
    let member: Member = serde_json::from_value(json!({
        "id": "u1", "nrp": "75010101", "nama": "Budi", "jabatan": "Brigadir", "role": "member",
        "simpanan": { "totalSimpanan": 500000.0, "simpananPokok": 100000.0, "simpananWajib": 400000.0 }
    }))
    .unwrap();
    assert_eq!(member.total_simpanan(), 500_000.0);
    assert_eq!(member.simpanan.unwrap().simpanan_wajib, 400_000.0);
}

#[test]
fn member_simpanan_accepts_bare_number() {
    let member: Member = serde_json::from_value(json!({
        "id": "u1", "nrp": "75010101", "nama": "Budi", "jabatan": "Brigadir", "role": "member",
        "simpanan": 750000
    }))
    .unwrap();
    assert_eq!(member.total_simpanan(), 750_000.0);
}

#[test]
fn member_join_date_falls_back_to_created_at() {
    let with_join: Member = serde_json::from_value(json!({
        "id": "u1", "nrp": "1", "nama": "A", "jabatan": "B", "role": "member",
        "createdAt": "2023-01-01", "joinDate": "2022-06-15"
    }))
    .unwrap();
    assert_eq!(with_join.joined(), "2022-06-15");

    let without: Member = serde_json::from_value(json!({
        "id": "u1", "nrp": "1", "nama": "A", "jabatan": "B", "role": "member",
        "createdAt": "2023-01-01"
    }))
    .unwrap();
    assert_eq!(without.joined(), "2023-01-01");
}

// =============================================================
// Transaction decoding
// =============================================================

#[test]
fn transaction_amount_accepts_number_and_string() {
    let number: Transaction = serde_json::from_value(json!({
        "id": "t1", "type": "setoran", "amount": 65000, "description": "Setoran wajib", "createdAt": "2024-01-15"
    }))
    .unwrap();
    assert_eq!(number.amount, 65_000.0);

    let string: Transaction = serde_json::from_value(json!({
        "id": "t2", "type": "penarikan", "amount": "150000.50", "description": "Penarikan", "createdAt": "2024-02-01"
    }))
    .unwrap();
    assert_eq!(string.amount, 150_000.5);
    assert!(string.is_debit());
}

#[test]
fn transaction_page_decodes_with_statistics() {
    let body = json!({
        "success": true,
        "data": {
            "transactions": [
                { "id": "t1", "type": "setoran", "amount": 65000, "description": "Setoran", "category": "wajib", "createdAt": "2024-01-15" }
            ],
            "pagination": { "currentPage": 1, "totalPages": 1, "totalTransactions": 1, "itemsPerPage": 10, "hasNext": false, "hasPrev": false },
            "statistics": { "totalTransactions": 1, "totalSetoran": 65000.0 }
        }
    });
    let page = decode_transaction_page(&body).unwrap();
    assert_eq!(page.transactions[0].category.as_deref(), Some("wajib"));
    assert_eq!(page.pagination.unwrap().total_items, 1);
    assert_eq!(page.statistics.unwrap().total_setoran, 65_000.0);
}

// =============================================================
// Loan and product decoding
// =============================================================

#[test]
fn piutang_list_decodes_enveloped_and_bare() {
    let enveloped = json!({
        "success": true,
        "data": {
            "piutang": [
                { "id": "p1", "jenis": "barang", "besarPinjaman": 1000000.0, "totalPiutang": 1100000.0,
                  "biayaAngsuran": 110000.0, "totalAngsuran": 10, "description": "Kulkas", "createdAt": "2024-03-01" }
            ]
        }
    });
    let list = decode_piutang_list(&enveloped).unwrap();
    assert_eq!(list[0].total_angsuran, 10);

    let bare = json!([]);
    assert_eq!(decode_piutang_list(&bare).unwrap(), vec![]);
}

#[test]
fn product_page_decodes_enveloped_object() {
    let body = json!({
        "success": true,
        "data": {
            "products": [
                { "id": "pr1", "namaProduk": "Beras 5kg", "harga": 72000.0, "deskripsi": "Beras premium",
                  "namaKategori": "makanan", "foto": "https://cdn/x.jpg", "createdAt": "2024-01-01" }
            ],
            "pagination": { "currentPage": 2, "totalPages": 4, "totalItems": 38, "limit": 10, "hasNextPage": true, "hasPrevPage": true }
        }
    });
    let page = decode_product_page(&body).unwrap();
    assert_eq!(page.products[0].nama_produk, "Beras 5kg");
    assert_eq!(page.pagination.unwrap().current_page, 2);
}

// =============================================================
// Write payload serialization
// =============================================================

#[test]
fn simpanan_update_serializes_backend_field_names() {
    let payload = SimpananUpdate {
        kind: SimpananKind::Setoran,
        category: SimpananCategory::Thr,
        amount: 50_000.0,
        description: "Tabungan lebaran".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["type"], "setoran");
    assert_eq!(value["category"], "thr");
    assert_eq!(value["amount"], 50_000.0);
}

#[test]
fn piutang_update_omits_amount_for_settlement() {
    let payload = PiutangUpdate {
        kind: PiutangUpdateKind::Pelunasan,
        amount: None,
        description: "Pelunasan penuh".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["type"], "pelunasan");
    assert!(value.get("amount").is_none());
}

#[test]
fn simpanan_category_round_trips_api_values() {
    for category in SimpananCategory::ALL {
        assert_eq!(
            SimpananCategory::from_api_value(category.api_value()),
            Some(category)
        );
    }
    assert_eq!(SimpananCategory::from_api_value("hari-raya"), None);
}
