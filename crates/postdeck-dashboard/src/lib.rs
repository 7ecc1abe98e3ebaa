//! # PostDeck Dashboard
//!
//! The aggregator: turns one immutable snapshot of posts and accounts into
//! the dashboard's read model. Pure — no I/O, no state; the host recomputes
//! on every new snapshot rather than patching the previous result.
//!
//! ```text
//! aggregate(posts, accounts)
//!   ├── stats:        total/scheduled/published/draft counts
//!   ├── timeline:     7 weekday buckets (Sun..Sat, zero-seeded)
//!   ├── distribution: per-status slices, zero counts dropped
//!   ├── upcoming:     next 10 SCHEDULED posts, preview + platform resolved
//!   └── accounts:     display fields + post count per account
//! ```

pub mod aggregate;
pub mod format;
pub mod timeline;

pub use aggregate::{
    aggregate, aggregate_with, AccountOverview, DashboardOverview, DashboardStats, StatusSlice,
    UpcomingPost,
};
pub use timeline::{TimelineEntry, WEEKDAY_LABELS};
