//! Weekday timeline — posts bucketed by the day of week they are scheduled.

use serde::Serialize;

use postdeck_core::models::Post;
use postdeck_core::resolve;

/// Fixed, locale-independent bucket order. Sunday first, matching the
/// dashboard chart's axis.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One weekday bucket of the timeline chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub day: &'static str,
    pub posts: u32,
}

/// Bucket posts into the 7 weekday slots by scheduled time.
///
/// Every slot is pre-seeded with 0, so the output always has exactly 7
/// entries in Sun..Sat order regardless of input. Posts without a resolvable
/// scheduled time are skipped with a warning, never fatal.
pub fn group_by_weekday(posts: &[Post]) -> Vec<TimelineEntry> {
    use chrono::Datelike;

    let mut counts = [0u32; 7];
    for post in posts {
        match resolve::scheduled_time(post) {
            Some(t) => counts[t.weekday().num_days_from_sunday() as usize] += 1,
            None => tracing::warn!("⚠️ Post {} has no scheduled time; skipped from timeline", post.id),
        }
    }
    WEEKDAY_LABELS
        .iter()
        .zip(counts)
        .map(|(day, posts)| TimelineEntry { day, posts })
        .collect()
}
