//! # PostDeck Core
//!
//! Shared domain layer for the PostDeck scheduling dashboard.
//! The dashboard itself is a thin UI over a REST backend; this crate owns the
//! parts both derived views agree on:
//!
//! ```text
//! backend JSON ──> Snapshot::from_json ──> Snapshot { posts, accounts }
//!                                             │
//!                          ┌──────────────────┴──────────────────┐
//!                          ▼                                     ▼
//!                 postdeck-dashboard                     postdeck-notify
//!                 (aggregate → overview)          (upcoming window + dismissals)
//! ```
//!
//! Field fallbacks (`scheduledAt || scheduledDate`, platform chains) live in
//! [`resolve`] so every consumer resolves them identically.

pub mod config;
pub mod error;
pub mod models;
pub mod resolve;
pub mod snapshot;

pub use config::DashboardConfig;
pub use error::{PostdeckError, Result};
pub use models::{AccountRef, Post, PostStatus, SocialAccount};
pub use snapshot::{Snapshot, SnapshotCell};
