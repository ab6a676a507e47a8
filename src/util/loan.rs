//! Loan amortization preview.
//!
//! Client-side only: shows the admin what a new loan would cost before the
//! ledger entry is submitted. The backend remains authoritative for the
//! persisted schedule; nothing here is ever written back.

#[cfg(test)]
#[path = "loan_test.rs"]
mod loan_test;

/// Result of an amortization preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanPreview {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Compute a standard annuity schedule preview.
///
/// `annual_rate_pct` is the yearly interest rate in percent (e.g. `2.5`),
/// compounded monthly. Returns `None` when the inputs cannot form a loan:
/// non-positive principal, zero term, or a negative rate.
pub fn amortize(principal: f64, annual_rate_pct: f64, term_months: u32) -> Option<LoanPreview> {
    if principal.is_nan() || principal <= 0.0 || term_months == 0 || annual_rate_pct < 0.0 {
        return None;
    }

    let months = f64::from(term_months);

    // Zero-rate loans degenerate to straight division.
    if annual_rate_pct == 0.0 {
        return Some(LoanPreview {
            monthly_payment: principal / months,
            total_payment: principal,
            total_interest: 0.0,
        });
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(months);
    let monthly_payment = principal * monthly_rate * growth / (growth - 1.0);
    let total_payment = monthly_payment * months;

    Some(LoanPreview {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    })
}
