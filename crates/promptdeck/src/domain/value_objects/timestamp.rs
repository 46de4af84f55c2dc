//! Millisecond timestamps

use chrono::{DateTime, Local, TimeZone, Utc};

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a millisecond timestamp as e.g. `Mar 3rd, 2024 14:05:09` in local time
pub fn format_millis(ms: i64) -> Option<String> {
    let utc: DateTime<Utc> = Utc.timestamp_millis_opt(ms).single()?;
    Some(format_datetime(&utc.with_timezone(&Local)))
}

fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    use chrono::Datelike;

    let day = dt.day();
    format!(
        "{} {}{}, {}",
        dt.format("%b"),
        day,
        ordinal_suffix(day),
        dt.format("%Y %H:%M:%S")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
