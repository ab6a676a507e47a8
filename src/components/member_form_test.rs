use super::*;

// =============================================================
// Identity validation
// =============================================================

#[test]
fn identity_accepts_complete_fields() {
    assert_eq!(validate_identity("75010101", "Budi Santoso", "Brigadir"), Ok(()));
}

#[test]
fn identity_trims_before_checking() {
    assert_eq!(validate_identity(" 75010101 ", "Budi", "Brigadir"), Ok(()));
}

#[test]
fn identity_rejects_missing_fields_in_order() {
    assert_eq!(
        validate_identity("", "Budi", "Brigadir"),
        Err("NRP wajib diisi".to_owned())
    );
    assert_eq!(
        validate_identity("75010101", "", "Brigadir"),
        Err("Nama wajib diisi".to_owned())
    );
    assert_eq!(
        validate_identity("75010101", "Budi", ""),
        Err("Jabatan wajib diisi".to_owned())
    );
}

#[test]
fn identity_rejects_non_numeric_nrp() {
    assert_eq!(
        validate_identity("75A101", "Budi", "Brigadir"),
        Err("NRP hanya boleh berisi angka".to_owned())
    );
}

// =============================================================
// Password validation
// =============================================================

#[test]
fn password_requires_six_characters() {
    assert!(validate_password("pendek", "pendek").is_ok());
    assert_eq!(
        validate_password("abc", "abc"),
        Err("Password minimal 6 karakter".to_owned())
    );
}

#[test]
fn password_requires_matching_confirmation() {
    assert_eq!(
        validate_password("rahasia123", "rahasia124"),
        Err("Konfirmasi password tidak cocok".to_owned())
    );
}
