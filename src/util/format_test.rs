use super::*;

// =============================================================
// Rupiah formatting
// =============================================================

#[test]
fn rupiah_groups_thousands_with_dots() {
    assert_eq!(rupiah(2_500_000.0), "Rp 2.500.000");
    assert_eq!(rupiah(65_000.0), "Rp 65.000");
    assert_eq!(rupiah(1_000.0), "Rp 1.000");
}

#[test]
fn rupiah_small_amounts_have_no_separator() {
    assert_eq!(rupiah(0.0), "Rp 0");
    assert_eq!(rupiah(999.0), "Rp 999");
}

#[test]
fn rupiah_truncates_fractions() {
    assert_eq!(rupiah(1234.56), "Rp 1.234");
}

#[test]
fn rupiah_keeps_negative_sign_in_front() {
    assert_eq!(rupiah(-50_000.0), "-Rp 50.000");
}

// =============================================================
// Amount parsing
// =============================================================

#[test]
fn parse_amount_accepts_plain_and_grouped_digits() {
    assert_eq!(parse_amount("65000"), Some(65_000.0));
    assert_eq!(parse_amount("2.500.000"), Some(2_500_000.0));
    assert_eq!(parse_amount("Rp 1.000"), Some(1_000.0));
}

#[test]
fn parse_amount_treats_comma_as_decimal() {
    assert_eq!(parse_amount("1.234,5"), Some(1_234.5));
}

#[test]
fn parse_amount_rejects_garbage_and_negatives() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("-5000"), None);
    assert_eq!(parse_amount("1.2.3,4,5"), None);
}

// =============================================================
// Indonesian date rendering
// =============================================================

#[test]
fn date_id_renders_plain_dates() {
    assert_eq!(date_id("2024-01-15"), "15 Januari 2024");
    assert_eq!(date_id("2021-12-01"), "1 Desember 2021");
}

#[test]
fn date_id_strips_time_component() {
    assert_eq!(date_id("2023-06-30T14:25:00.000Z"), "30 Juni 2023");
}

#[test]
fn date_id_passes_through_unrecognized_input() {
    assert_eq!(date_id("not a date"), "not a date");
    assert_eq!(date_id(""), "");
    assert_eq!(date_id("2024-13-01"), "2024-13-01");
}
