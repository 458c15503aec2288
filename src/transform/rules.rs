//! Column-local rewrite rules shared by the transformers.

use chrono::Month;
use tracing::debug;

/// Every synthesized contact date falls in this year.
pub const CONTACT_YEAR: i32 = 2022;

/// Drop every `.` then turn each `-` into `_`: `blue-collar` → `blue_collar`.
pub fn normalize_job(raw: &str) -> String {
    raw.replace('.', "").replace('-', "_")
}

/// Turn `.` into `_`; a value reading `unknown` in any case becomes missing.
pub fn normalize_education(raw: &str) -> Option<String> {
    let value = raw.replace('.', "_");
    if value.to_lowercase() == "unknown" {
        None
    } else {
        Some(value)
    }
}

/// 1 when `value` equals `truthy` ignoring case, 0 for anything else including missing.
pub fn binary_flag(value: Option<&str>, truthy: &str) -> u8 {
    match value {
        Some(v) if v.to_lowercase() == truthy => 1,
        _ => 0,
    }
}

/// Month number from an English month name (`may`, `September`) or an integer.
/// Unrecognized and missing tokens resolve to January.
pub fn resolve_month(raw: Option<&str>) -> i64 {
    let token = raw.unwrap_or_default().trim().to_lowercase();
    if let Ok(month) = token.parse::<Month>() {
        return i64::from(month.number_from_month());
    }
    match token.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            debug!(month = ?raw, "unrecognized month, using 1");
            1
        }
    }
}

/// Day-of-month as written; whole floats such as `21.0` are accepted.
/// Anything unparsable resolves to 1. No calendar range check happens here.
pub fn resolve_day(raw: Option<&str>) -> i64 {
    let parsed = raw.map(str::trim).and_then(|v| {
        v.parse::<i64>().ok().or_else(|| {
            v.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        })
    });
    parsed.unwrap_or_else(|| {
        debug!(day = ?raw, "unparsable day, using 1");
        1
    })
}

/// `YYYY-MM-DD` in [`CONTACT_YEAR`]. Out-of-calendar pairs like February 31 are kept.
pub fn contact_date(month: Option<&str>, day: Option<&str>) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        CONTACT_YEAR,
        resolve_month(month),
        resolve_day(day)
    )
}
