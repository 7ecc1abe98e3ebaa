//! Domain models — posts and social accounts as the backend serves them.
//!
//! These deserialize straight from the backend's camelCase JSON. Timestamps
//! are lenient on purpose: the backend has been observed emitting both RFC
//! 3339 and `"2025-12-01 10:00"` style strings, and a bad date must never
//! sink a whole snapshot. An unparsable timestamp becomes `None` (with a
//! warning) and the post simply drops out of time-based views.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle stage of a post. The backend's enum is closed, but unrecognized
/// values are tolerated and counted toward no status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PostStatus {
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    #[serde(rename = "PUBLISHED")]
    Published,
    #[serde(rename = "DRAFT")]
    Draft,
    #[serde(other, rename = "UNKNOWN")]
    #[default]
    Unknown,
}

impl PostStatus {
    /// Display label used by the status distribution.
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Scheduled => "Scheduled",
            PostStatus::Published => "Published",
            PostStatus::Draft => "Draft",
            PostStatus::Unknown => "Unknown",
        }
    }
}

/// A scheduled/published/draft social-media post.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque backend identifier (numbers are accepted and stringified).
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    /// Platform override; most posts inherit the platform of their first
    /// linked account instead (see `resolve::platform`).
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Legacy alias some backend routes still populate instead of
    /// `scheduledAt`.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Accounts this post will be published to, in display order.
    #[serde(default)]
    pub social_accounts: Vec<AccountRef>,
}

impl Post {
    /// Create an empty post with the given id (status `Unknown`, no dates).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// An entry of a post's `socialAccounts` list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// A managed social account (influencer profile).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Parse one of the timestamp shapes the backend emits.
/// Naive timestamps are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Deserialize a timestamp without ever failing the record: absent, null,
/// non-string, or unparsable values all become `None`.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => {
            let parsed = parse_timestamp(&s);
            if parsed.is_none() {
                tracing::warn!("⚠️ Unparsable timestamp '{s}'; treating as unscheduled");
            }
            parsed
        }
        Some(other) => {
            tracing::warn!("⚠️ Timestamp is not a string ({other}); treating as unscheduled");
            None
        }
    })
}

/// Accept both string and numeric ids; the core treats them as opaque.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or number, got {other}"
        ))),
    }
}
