//! Relative date labels for the notification panel.
//!
//! Pure display mapping — nothing here feeds back into windowing. The
//! whole-day difference is a ceiling, matching the panel's behavior: a post
//! 36 hours out is "in 2 days", one later today is "today".

use chrono::{DateTime, Utc};

/// Label for a scheduled time relative to `now`: "today", "tomorrow",
/// "in 2 days", "in 3 days", else the absolute calendar date (dd/mm/yyyy).
pub fn relative_day_label(scheduled: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_secs = scheduled.signed_duration_since(now).num_seconds();
    let days = (diff_secs as f64 / 86_400.0).ceil() as i64;
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        2 => "in 2 days".to_string(),
        3 => "in 3 days".to_string(),
        _ => scheduled.format("%d/%m/%Y").to_string(),
    }
}

/// Clock label for the "at HH:MM" suffix.
pub fn time_label(scheduled: DateTime<Utc>) -> String {
    scheduled.format("%H:%M").to_string()
}
