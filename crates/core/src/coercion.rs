//! Coercion of untyped inbound JSON values into storable values.
//!
//! Every function here is total: malformed input becomes `None` (or `false`
//! for booleans) instead of an error, so a single bad field never fails the
//! whole request. The [`de`] module wires the same rules into serde via
//! `deserialize_with`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Tokens accepted as `true` by [`coerce_bool`] (compared lowercased).
pub const TRUTHY_TOKENS: &[&str] = &["1", "true", "t", "yes", "y", "on", "sim"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset-bearing layouts, tried after a trailing `Z` has been rewritten.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Parse an ISO-8601 date, dropping any time component after `T` or a space.
pub fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// [`parse_date_str`] over a JSON value. Non-strings yield `None`.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    value.as_str().and_then(parse_date_str)
}

/// Parse an ISO-8601 date or date-time into a timezone-naive instant.
///
/// A trailing `Z` is normalized to `+00:00`. When an offset is present it is
/// discarded and the wall-clock reading kept as-is. A bare date maps to
/// midnight.
pub fn parse_datetime_str(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let normalized = match raw.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => raw.to_string(),
    };

    OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
        .map(|dt| dt.naive_local())
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// [`parse_datetime_str`] over a JSON value. Non-strings yield `None`.
pub fn parse_datetime(value: &Value) -> Option<NaiveDateTime> {
    value.as_str().and_then(parse_datetime_str)
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Coerce any JSON value into a boolean. Never fails.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Null => false,
        Value::String(s) => {
            let token = s.trim().to_lowercase();
            TRUTHY_TOKENS.contains(&token.as_str())
        }
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Coerce a number or numeric string into an `i32`, truncating fractions.
pub fn coerce_i32(value: &Value) -> Option<i32> {
    let wide = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    }?;
    i32::try_from(wide).ok()
}

/// Coerce a number or numeric string into a finite `f64`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

// ---------------------------------------------------------------------------
// Serde adapters
// ---------------------------------------------------------------------------

/// `deserialize_with` adapters.
///
/// Plain adapters return the coerced value and pair with
/// `#[serde(default)]` so an absent key also yields the default. The
/// `patch_*` variants wrap the result in an outer `Some` so update DTOs can
/// tell "key absent" (outer `None`) from "key present" (outer `Some`).
pub mod de {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        Value::deserialize(d).map(|v| super::parse_date(&v))
    }

    pub fn datetime<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        Value::deserialize(d).map(|v| super::parse_datetime(&v))
    }

    pub fn boolean<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Value::deserialize(d).map(|v| super::coerce_bool(&v))
    }

    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
        Value::deserialize(d).map(|v| super::coerce_i32(&v))
    }

    pub fn decimal<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Value::deserialize(d).map(|v| super::coerce_f64(&v))
    }

    pub fn patch_date<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<NaiveDate>>, D::Error> {
        date(d).map(Some)
    }

    pub fn patch_datetime<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<NaiveDateTime>>, D::Error> {
        datetime(d).map(Some)
    }

    pub fn patch_boolean<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        boolean(d).map(Some)
    }

    pub fn patch_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<i32>>, D::Error> {
        int(d).map(Some)
    }

    pub fn patch_decimal<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<f64>>, D::Error> {
        decimal(d).map(Some)
    }
}
