//! Display formatting for rupiah amounts and backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Parse a user-typed amount using Indonesian conventions: dots group
/// thousands, a comma starts the decimal part, an optional `Rp` prefix is
/// ignored. `None` for anything that is not a non-negative finite number.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim().trim_start_matches("Rp").trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Format an amount as Indonesian rupiah, e.g. `Rp 2.500.000`.
///
/// Amounts arrive from the backend as whole rupiah; fractional parts are
/// truncated. Negative amounts keep their sign in front of the prefix.
pub fn rupiah(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.trunc() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}Rp {grouped}")
}

/// Render an ISO-8601 date or datetime string as `15 Januari 2024`.
///
/// The backend emits `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS...`; anything that
/// does not start with that shape is returned unchanged rather than dropped.
pub fn date_id(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    let mut parts = date_part.splitn(3, '-');

    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let Ok(month_num) = month.parse::<usize>() else {
        return iso.to_owned();
    };
    let Some(month_name) = MONTHS_ID.get(month_num.wrapping_sub(1)) else {
        return iso.to_owned();
    };
    let day = day.trim_start_matches('0');
    if day.is_empty() || year.len() != 4 {
        return iso.to_owned();
    }

    format!("{day} {month_name} {year}")
}
