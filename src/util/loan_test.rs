use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

// =============================================================
// Annuity math
// =============================================================

#[test]
fn amortize_matches_annuity_formula() {
    // 1_000_000 at 12% yearly over 12 months: monthly rate 1%.
    let p = amortize(1_000_000.0, 12.0, 12).expect("valid loan");
    assert!(close(p.monthly_payment, 88_848.79), "got {}", p.monthly_payment);
    assert!(close(p.total_payment, p.monthly_payment * 12.0));
    assert!(close(p.total_interest, p.total_payment - 1_000_000.0));
}

#[test]
fn amortize_interest_is_positive_for_positive_rate() {
    let p = amortize(500_000.0, 2.5, 12).expect("valid loan");
    assert!(p.total_interest > 0.0);
    assert!(p.total_payment > 500_000.0);
}

#[test]
fn amortize_zero_rate_splits_principal_evenly() {
    let p = amortize(1_200_000.0, 0.0, 12).expect("valid loan");
    assert!(close(p.monthly_payment, 100_000.0));
    assert!(close(p.total_payment, 1_200_000.0));
    assert!(close(p.total_interest, 0.0));
}

#[test]
fn amortize_single_month_pays_principal_plus_one_period_interest() {
    let p = amortize(100_000.0, 12.0, 1).expect("valid loan");
    assert!(close(p.monthly_payment, 101_000.0), "got {}", p.monthly_payment);
}

// =============================================================
// Degenerate inputs
// =============================================================

#[test]
fn amortize_rejects_non_loans() {
    assert!(amortize(0.0, 2.5, 12).is_none());
    assert!(amortize(-10.0, 2.5, 12).is_none());
    assert!(amortize(1_000.0, 2.5, 0).is_none());
    assert!(amortize(1_000.0, -1.0, 12).is_none());
    assert!(amortize(f64::NAN, 2.5, 12).is_none());
}
