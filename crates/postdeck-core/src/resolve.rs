//! Field resolution chains.
//!
//! The backend is inconsistent about where a post's scheduled time, platform,
//! and display text live. Instead of coalescing ad hoc at every call site,
//! the chains are defined once here; the aggregator and the notification
//! window must agree on all of them.

use chrono::{DateTime, Utc};

use crate::models::Post;

/// Generic platform label when neither the post nor its accounts carry one.
pub const DEFAULT_PLATFORM: &str = "Social Media";

/// The scheduled time of a post: `scheduledAt`, else `scheduledDate`.
/// `None` means the post is excluded from every time-based view.
pub fn scheduled_time(post: &Post) -> Option<DateTime<Utc>> {
    post.scheduled_at.or(post.scheduled_date)
}

/// The platform a post displays under: its own `platform` field, else the
/// platform of its first linked account, else [`DEFAULT_PLATFORM`].
pub fn platform(post: &Post) -> String {
    if let Some(p) = non_empty(post.platform.as_deref()) {
        return p.to_string();
    }
    post.social_accounts
        .first()
        .and_then(|acc| non_empty(acc.platform.as_deref()))
        .unwrap_or(DEFAULT_PLATFORM)
        .to_string()
}

/// The text a post is summarized by: `content`, else `description`, else
/// `title`, else empty.
pub fn display_text(post: &Post) -> &str {
    non_empty(post.content.as_deref())
        .or_else(|| non_empty(post.description.as_deref()))
        .or_else(|| non_empty(post.title.as_deref()))
        .unwrap_or("")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
