use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Render the display label stored with a new item, in the local time zone
///
/// Mirrors the browser's en-US `toLocaleString()`: "6/15/2024, 2:05:09 PM".
pub fn display_label(timestamp: &DateTime<Utc>) -> String {
    format_display_label(&timestamp.with_timezone(&Local))
}

/// Render a display label in an arbitrary time zone
pub fn format_display_label<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
