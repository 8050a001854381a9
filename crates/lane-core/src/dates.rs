//! Date utilities.
//!
//! Memories are dated at day granularity. On the wire a date is a full
//! RFC 3339 timestamp at UTC midnight, which is what a browser `Date`
//! serializes to; bare `YYYY-MM-DD` strings are accepted on input.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

const HEBREW_MONTHS: [&str; 12] = [
    "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני", "יולי", "אוגוסט", "ספטמבר", "אוקטובר",
    "נובמבר", "דצמבר",
];

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Time part written by [`format_date`]
const MIDNIGHT_UTC: &str = "00:00:00.000Z";

/// Parse a date from an RFC 3339 timestamp or a bare `YYYY-MM-DD`.
///
/// Years outside `0000..=9999` use the signed form `format_date` writes
/// (`+10000-01-01`, `-0001-01-01`), bare or at UTC midnight.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    let day = match s.split_once('T') {
        Some((day, MIDNIGHT_UTC)) => day,
        Some(_) => return None,
        None => s,
    };
    parse_day(day)
}

/// `[+-]YYYY-MM-DD` with any number of year digits
fn parse_day(s: &str) -> Option<NaiveDate> {
    let mut parts = s.rsplitn(3, '-');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;

    let digits = year.strip_prefix(['+', '-']).unwrap_or(year);
    let numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !numeric(digits) || !numeric(month) || !numeric(day) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Format a date as an RFC 3339 timestamp at UTC midnight.
///
/// Years past 9999 or before 0 get an explicit sign.
pub fn format_date(date: &NaiveDate) -> String {
    format!("{}T{MIDNIGHT_UTC}", date.format("%Y-%m-%d"))
}

/// Long-form Hebrew rendering, e.g. `3 באפריל 2012`
pub fn format_hebrew(date: &NaiveDate) -> String {
    let month = HEBREW_MONTHS[date.month0() as usize];
    format!("{} ב{} {}", date.day(), month, date.year())
}

/// Serde adapter for `NaiveDate` fields in the export schema.
pub(crate) mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}
