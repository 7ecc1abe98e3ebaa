//! # PostDeck Notify
//!
//! The notification window engine: which posts are coming up within the next
//! few days, minus the ones the viewer already dismissed.
//!
//! ## Design
//! - Windowing is a pure function of `(posts, dismissed, now, horizon)` —
//!   recomputed on every snapshot or dismissal change, never patched.
//! - The dismissal set is the only mutable state in the whole core. It is
//!   session-scoped, additive-only, and in-memory; a dismissed id simply
//!   stops mattering once its post leaves the horizon.
//! - The window is status-agnostic: any post with a resolvable scheduled
//!   time inside the horizon qualifies, drafts included.

pub mod labels;
pub mod session;
pub mod window;

pub use labels::{relative_day_label, time_label};
pub use session::{DismissalSet, NotificationSession};
pub use window::{count_upcoming, upcoming_within};
