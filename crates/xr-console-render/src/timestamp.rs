//! Wall-clock prefix for console lines

use chrono::{DateTime, Local, TimeZone};

/// Width in columns of a prefix produced by [`timestamp_prefix`]
pub const TIMESTAMP_PREFIX_WIDTH: usize = "[HH:MM:SS] ".len();

/// `[HH:MM:SS] ` in local time for a millisecond epoch timestamp
pub fn timestamp_prefix(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).earliest() {
        Some(time) => format_prefix(&time),
        None => "[--:--:--] ".to_string(),
    }
}

pub(crate) fn format_prefix<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} ", time.format("[%H:%M:%S]"))
}
