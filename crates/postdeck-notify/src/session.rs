//! Session-scoped dismissal state.
//!
//! The viewer's "mark as viewed" checkmarks live here and nowhere else — an
//! explicitly owned value, not a global. Created empty at session start,
//! never persisted, never pruned: ids only ever accumulate, and an id whose
//! post has left the horizon is simply irrelevant to future queries. That
//! unbounded growth is fine for a short-lived UI session.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use postdeck_core::models::Post;

use crate::window;

/// The set of post ids the viewer has acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissalSet {
    ids: HashSet<String>,
}

impl DismissalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a post as viewed. Idempotent; dismissing an unknown or already
    /// dismissed id is a no-op. Returns whether the id was newly added.
    pub fn dismiss(&mut self, post_id: &str) -> bool {
        self.ids.insert(post_id.to_string())
    }

    pub fn contains(&self, post_id: &str) -> bool {
        self.ids.contains(post_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// One viewer's notification state: the dismissal set plus the configured
/// horizon. The presentation layer holds exactly one of these per session
/// and re-queries it after every snapshot or dismissal change.
#[derive(Debug, Clone)]
pub struct NotificationSession {
    dismissed: DismissalSet,
    horizon_days: i64,
}

impl Default for NotificationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSession {
    /// New session with the default 3-day horizon.
    pub fn new() -> Self {
        Self::with_horizon(postdeck_core::DashboardConfig::default().horizon_days)
    }

    pub fn with_horizon(horizon_days: i64) -> Self {
        Self {
            dismissed: DismissalSet::new(),
            horizon_days,
        }
    }

    /// Posts to show in the notification panel for the given snapshot.
    pub fn upcoming<'a>(&self, posts: &'a [Post], now: DateTime<Utc>) -> Vec<&'a Post> {
        window::upcoming_within(posts, &self.dismissed, now, self.horizon_days)
    }

    /// Badge count; always consistent with [`upcoming`](Self::upcoming).
    pub fn count(&self, posts: &[Post], now: DateTime<Utc>) -> usize {
        window::count_upcoming(posts, &self.dismissed, now, self.horizon_days)
    }

    /// Mark a post as viewed.
    pub fn dismiss(&mut self, post_id: &str) -> bool {
        let added = self.dismissed.dismiss(post_id);
        if added {
            tracing::debug!("🔕 Post {post_id} dismissed");
        }
        added
    }

    pub fn dismissed(&self) -> &DismissalSet {
        &self.dismissed
    }

    pub fn horizon_days(&self) -> i64 {
        self.horizon_days
    }
}
