//! Horizon window computation.

use chrono::{DateTime, Duration, Utc};

use postdeck_core::models::Post;
use postdeck_core::resolve;

use crate::session::DismissalSet;

/// Posts scheduled within `[now, now + horizon_days]` (inclusive both ends),
/// excluding dismissed ids, ascending by scheduled time with input order
/// preserved on ties. Status-agnostic: a draft inside the horizon qualifies.
pub fn upcoming_within<'a>(
    posts: &'a [Post],
    dismissed: &DismissalSet,
    now: DateTime<Utc>,
    horizon_days: i64,
) -> Vec<&'a Post> {
    let horizon_end = now + Duration::days(horizon_days);
    let mut hits: Vec<(&Post, DateTime<Utc>)> = posts
        .iter()
        .filter(|p| !dismissed.contains(&p.id))
        .filter_map(|p| resolve::scheduled_time(p).map(|t| (p, t)))
        .filter(|(_, t)| *t >= now && *t <= horizon_end)
        .collect();
    hits.sort_by_key(|(_, t)| *t);
    hits.into_iter().map(|(post, _)| post).collect()
}

/// Number of upcoming posts. Defined as the length of [`upcoming_within`]
/// rather than recomputed independently, so the badge count and the panel
/// list can never disagree.
pub fn count_upcoming(
    posts: &[Post],
    dismissed: &DismissalSet,
    now: DateTime<Utc>,
    horizon_days: i64,
) -> usize {
    upcoming_within(posts, dismissed, now, horizon_days).len()
}
