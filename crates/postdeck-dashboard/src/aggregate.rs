//! The aggregator — one snapshot in, the full dashboard read model out.

use chrono::{DateTime, Utc};
use serde::Serialize;

use postdeck_core::config::DashboardConfig;
use postdeck_core::models::{Post, PostStatus, SocialAccount};
use postdeck_core::resolve;

use crate::format;
use crate::timeline::{self, TimelineEntry};

/// Headline counters of the dashboard.
///
/// Unknown statuses count toward no bucket, so the three status counters may
/// sum to less than `total_posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: usize,
    pub total_accounts: usize,
    pub scheduled_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
}

/// One slice of the status distribution chart. Zero-count slices are never
/// emitted — an empty status contributes nothing to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub label: &'static str,
    pub count: usize,
}

/// Lightweight projection of a scheduled post for the "upcoming" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPost {
    pub id: String,
    /// Content preview, truncated for display.
    pub content: String,
    /// Resolved platform (post's own, else first account's, else generic).
    pub platform: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: PostStatus,
}

/// A social account with its derived post count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub platform: String,
    pub image_url: Option<String>,
    /// Number of posts whose account list contains this account.
    pub posts: usize,
}

/// The complete dashboard read model for one snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub posts_timeline: Vec<TimelineEntry>,
    pub status_distribution: Vec<StatusSlice>,
    pub upcoming_posts: Vec<UpcomingPost>,
    pub accounts: Vec<AccountOverview>,
}

/// Aggregate with the default config (10 upcoming entries, 50-char previews).
pub fn aggregate(posts: &[Post], accounts: &[SocialAccount]) -> DashboardOverview {
    aggregate_with(posts, accounts, &DashboardConfig::default())
}

/// Aggregate one snapshot into the dashboard read model. Pure; call again
/// whenever the snapshot changes.
pub fn aggregate_with(
    posts: &[Post],
    accounts: &[SocialAccount],
    config: &DashboardConfig,
) -> DashboardOverview {
    let count_status = |status: PostStatus| posts.iter().filter(|p| p.status == status).count();
    let stats = DashboardStats {
        total_posts: posts.len(),
        total_accounts: accounts.len(),
        scheduled_posts: count_status(PostStatus::Scheduled),
        published_posts: count_status(PostStatus::Published),
        draft_posts: count_status(PostStatus::Draft),
    };

    let status_distribution: Vec<StatusSlice> = [
        (PostStatus::Scheduled, stats.scheduled_posts),
        (PostStatus::Published, stats.published_posts),
        (PostStatus::Draft, stats.draft_posts),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(status, count)| StatusSlice {
        label: status.label(),
        count,
    })
    .collect();

    tracing::debug!(
        "📊 Aggregated {} posts / {} accounts",
        stats.total_posts,
        stats.total_accounts
    );

    DashboardOverview {
        posts_timeline: timeline::group_by_weekday(posts),
        status_distribution,
        upcoming_posts: upcoming_posts(posts, config),
        accounts: account_overviews(posts, accounts),
        stats,
    }
}

/// The next scheduled posts: `SCHEDULED` status, resolvable time, ascending
/// by time with input order preserved on ties, capped at the config limit.
fn upcoming_posts(posts: &[Post], config: &DashboardConfig) -> Vec<UpcomingPost> {
    let mut scheduled: Vec<(&Post, DateTime<Utc>)> = posts
        .iter()
        .filter(|p| p.status == PostStatus::Scheduled)
        .filter_map(|p| resolve::scheduled_time(p).map(|t| (p, t)))
        .collect();
    // Stable sort keeps input order for equal timestamps.
    scheduled.sort_by_key(|(_, t)| *t);
    scheduled.truncate(config.upcoming_limit);
    scheduled
        .into_iter()
        .map(|(post, scheduled_at)| UpcomingPost {
            id: post.id.clone(),
            content: format::preview(resolve::display_text(post), config.preview_max_chars),
            platform: resolve::platform(post),
            scheduled_at,
            status: post.status,
        })
        .collect()
}

fn account_overviews(posts: &[Post], accounts: &[SocialAccount]) -> Vec<AccountOverview> {
    accounts
        .iter()
        .map(|acc| AccountOverview {
            id: acc.id.clone(),
            name: acc.name.clone(),
            handle: acc.handle.clone(),
            platform: acc.platform.clone(),
            image_url: acc.image_url.clone(),
            posts: posts
                .iter()
                .filter(|p| p.social_accounts.iter().any(|r| r.id == acc.id))
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use postdeck_core::models::AccountRef;

    fn post(id: &str, status: PostStatus, at: Option<DateTime<Utc>>) -> Post {
        let mut post = Post::new(id);
        post.status = status;
        post.scheduled_at = at;
        post.content = Some(format!("content of {id}"));
        post
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_snapshot() {
        let overview = aggregate(&[], &[]);
        assert_eq!(overview.stats, DashboardStats::default());
        assert_eq!(overview.posts_timeline.len(), 7);
        assert!(overview.posts_timeline.iter().all(|e| e.posts == 0));
        assert!(overview.status_distribution.is_empty());
        assert!(overview.upcoming_posts.is_empty());
        assert!(overview.accounts.is_empty());
    }

    #[test]
    fn test_status_counts_ignore_unknown() {
        let posts = vec![
            post("p1", PostStatus::Scheduled, None),
            post("p2", PostStatus::Published, None),
            post("p3", PostStatus::Unknown, None),
        ];
        let overview = aggregate(&posts, &[]);
        assert_eq!(overview.stats.total_posts, 3);
        assert_eq!(overview.stats.scheduled_posts, 1);
        assert_eq!(overview.stats.published_posts, 1);
        assert_eq!(overview.stats.draft_posts, 0);
        let bucketed = overview.stats.scheduled_posts
            + overview.stats.published_posts
            + overview.stats.draft_posts;
        assert!(bucketed <= overview.stats.total_posts);
    }

    #[test]
    fn test_distribution_drops_zero_slices() {
        let posts = vec![
            post("p1", PostStatus::Draft, None),
            post("p2", PostStatus::Draft, None),
        ];
        let overview = aggregate(&posts, &[]);
        assert_eq!(
            overview.status_distribution,
            vec![StatusSlice { label: "Draft", count: 2 }]
        );
    }

    #[test]
    fn test_upcoming_sorted_capped_and_scheduled_only() {
        let mut posts: Vec<Post> = (1..=12)
            .map(|i| post(&format!("p{i}"), PostStatus::Scheduled, Some(at(20 - i, 10))))
            .collect();
        posts.push(post("draft", PostStatus::Draft, Some(at(1, 8))));
        posts.push(post("undated", PostStatus::Scheduled, None));

        let overview = aggregate(&posts, &[]);
        assert_eq!(overview.upcoming_posts.len(), 10);
        assert!(overview
            .upcoming_posts
            .windows(2)
            .all(|w| w[0].scheduled_at <= w[1].scheduled_at));
        assert!(overview.upcoming_posts.iter().all(|p| p.status == PostStatus::Scheduled));
        // p12 is the earliest scheduled post (day 8).
        assert_eq!(overview.upcoming_posts[0].id, "p12");
    }

    #[test]
    fn test_upcoming_ties_keep_input_order() {
        let t = at(10, 10);
        let posts = vec![
            post("first", PostStatus::Scheduled, Some(t)),
            post("second", PostStatus::Scheduled, Some(t)),
        ];
        let overview = aggregate(&posts, &[]);
        let ids: Vec<_> = overview.upcoming_posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_upcoming_projection_resolves_platform_and_preview() {
        let mut p = post("p1", PostStatus::Scheduled, Some(at(10, 10)));
        p.content = Some("x".repeat(80));
        p.social_accounts.push(AccountRef {
            id: "a1".into(),
            platform: Some("Instagram".into()),
        });
        let overview = aggregate(&[p], &[]);
        let entry = &overview.upcoming_posts[0];
        assert_eq!(entry.platform, "Instagram");
        assert_eq!(entry.content.chars().count(), 53);
        assert!(entry.content.ends_with("..."));
    }

    #[test]
    fn test_account_post_counts() {
        let mut p1 = post("p1", PostStatus::Published, None);
        p1.social_accounts.push(AccountRef { id: "a1".into(), platform: None });
        let mut p2 = post("p2", PostStatus::Draft, None);
        p2.social_accounts.push(AccountRef { id: "a1".into(), platform: None });
        p2.social_accounts.push(AccountRef { id: "a2".into(), platform: None });

        let accounts = vec![
            SocialAccount { id: "a1".into(), name: "Ana".into(), handle: "@ana".into(), platform: "Instagram".into(), image_url: None },
            SocialAccount { id: "a2".into(), name: "Bia".into(), handle: "@bia".into(), platform: "TikTok".into(), image_url: None },
            SocialAccount { id: "a3".into(), name: "Caio".into(), handle: "@caio".into(), platform: "YouTube".into(), image_url: None },
        ];
        let overview = aggregate(&[p1, p2], &accounts);
        let counts: Vec<_> = overview.accounts.iter().map(|a| (a.id.as_str(), a.posts)).collect();
        assert_eq!(counts, [("a1", 2), ("a2", 1), ("a3", 0)]);
    }

    #[test]
    fn test_overview_serializes_in_the_ui_contract_shape() {
        let posts = vec![post("p1", PostStatus::Scheduled, Some(at(1, 10)))];
        let json = serde_json::to_value(aggregate(&posts, &[])).unwrap();
        assert_eq!(json["stats"]["totalPosts"], 1);
        assert_eq!(json["postsTimeline"].as_array().unwrap().len(), 7);
        assert!(json["upcomingPosts"][0]["scheduledAt"]
            .as_str()
            .unwrap()
            .starts_with("2025-12-01T10:00:00"));
        assert_eq!(json["upcomingPosts"][0]["status"], "SCHEDULED");
    }

    #[test]
    fn test_timeline_sums_to_dated_posts() {
        let posts = vec![
            post("p1", PostStatus::Scheduled, Some(at(1, 10))),
            post("p2", PostStatus::Published, Some(at(2, 10))),
            post("p3", PostStatus::Draft, None),
        ];
        let overview = aggregate(&posts, &[]);
        let total: u32 = overview.posts_timeline.iter().map(|e| e.posts).sum();
        assert_eq!(total, 2);
    }
}
