use chrono::{DateTime, Utc};

use crate::catalog::parse_timestamp;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Coarse relative time. Future instants read as "just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < MINUTE {
        return "just now".to_string();
    }
    if seconds < HOUR {
        return plural(seconds / MINUTE, "minute");
    }
    if seconds < DAY {
        return plural(seconds / HOUR, "hour");
    }
    if seconds < WEEK {
        return plural(seconds / DAY, "day");
    }
    if seconds < MONTH {
        return plural(seconds / WEEK, "week");
    }
    if seconds < YEAR {
        return plural(seconds / MONTH, "month");
    }
    plural(seconds / YEAR, "year")
}

pub fn time_ago_str(iso: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(iso) {
        Ok(then) => time_ago(then, now),
        Err(_) => "just now".to_string(),
    }
}

/// e.g. `Feb 24, 2026`, always in UTC.
pub fn format_full_date(t: DateTime<Utc>) -> String {
    t.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
#[path = "../tests/src_inline/time.rs"]
mod tests;
