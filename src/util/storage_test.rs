use super::*;

// =============================================================
// Host-side store
// =============================================================

#[test]
fn set_then_get_round_trips() {
    set("koperasi_token", "jwt-abc");
    assert_eq!(get("koperasi_token"), Some("jwt-abc".to_owned()));
    remove("koperasi_token");
    assert_eq!(get("koperasi_token"), None);
}

#[test]
fn get_is_none_for_missing_keys() {
    assert_eq!(get("koperasi_missing"), None);
}

#[test]
fn set_overwrites_an_existing_value() {
    set("koperasi_flash", "first");
    set("koperasi_flash", "second");
    assert_eq!(get("koperasi_flash"), Some("second".to_owned()));
}

#[test]
fn take_reads_once_and_clears() {
    set("koperasi_once", "Sesi telah berakhir");
    assert_eq!(take("koperasi_once"), Some("Sesi telah berakhir".to_owned()));
    assert_eq!(take("koperasi_once"), None);
}
