//! Display formatting for amounts and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::Amount;

/// Rendered in place of a date that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an amount as whole US dollars with thousands separators.
///
/// Fractions are rounded half away from zero.
///
/// # Examples
///
/// ```
/// use civitrack_core::format::format_currency;
/// assert_eq!(format_currency(12_500_000.0), "$12,500,000");
/// assert_eq!(format_currency(-1_250.4), "-$1,250");
/// ```
pub fn format_currency(amount: Amount) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let whole = format!("{:.0}", amount.abs().round());
    format!("{sign}${}", group_thousands(&whole))
}

/// Insert `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a date-like string as `"Mon D, YYYY"`.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]`, and RFC 3339. Input
/// that does not parse renders [`INVALID_DATE`] instead of failing.
///
/// # Examples
///
/// ```
/// use civitrack_core::format::format_date;
/// assert_eq!(format_date("2025-01-15"), "Jan 15, 2025");
/// assert_eq!(format_date("soon"), "Invalid Date");
/// ```
pub fn format_date(date: &str) -> String {
    parse_calendar_date(date)
        .map(format_calendar_date)
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Format a typed date as `"Mon D, YYYY"`.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// The calendar date as written in the input; no timezone shift is applied.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
