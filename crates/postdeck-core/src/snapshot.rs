//! Snapshots — immutable fetch results and the last-write-wins cell.
//!
//! The data-fetch collaborator is outside this core; what arrives here is the
//! decoded payload of one fetch. Decoding is structural-or-nothing at the
//! collection level (a payload that is not an array fails the whole
//! computation) but tolerant at the record level (a malformed record is
//! logged and skipped, matching how individual bad timestamps are handled).

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{PostdeckError, Result};
use crate::models::{Post, SocialAccount};

/// A point-in-time view of the backend's posts and accounts.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub posts: Vec<Post>,
    pub accounts: Vec<SocialAccount>,
    /// Fetch ticket this snapshot was produced under (0 = untracked).
    pub seq: u64,
}

impl Snapshot {
    pub fn new(posts: Vec<Post>, accounts: Vec<SocialAccount>) -> Self {
        Self {
            posts,
            accounts,
            seq: 0,
        }
    }

    /// Decode the raw `/posts` and `/social-accounts` payloads.
    ///
    /// A non-array payload is a [`PostdeckError::Structural`] failure; the
    /// caller must retry with a corrected snapshot rather than aggregate
    /// partially. Records that fail to decode are skipped with a warning.
    pub fn from_json(posts: Value, accounts: Value) -> Result<Self> {
        Ok(Self::new(
            decode_records(posts, "posts")?,
            decode_records(accounts, "social accounts")?,
        ))
    }
}

fn decode_records<T: DeserializeOwned>(payload: Value, what: &str) -> Result<Vec<T>> {
    let Value::Array(items) = payload else {
        return Err(PostdeckError::Structural(format!(
            "{what} payload is not an array"
        )));
    };
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value(item) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("⚠️ Skipping malformed {what} record: {e}"),
        }
    }
    Ok(records)
}

/// Holder for the latest snapshot, modeling "a new fetch supersedes any
/// in-flight one". Each fetch takes a ticket before it starts; a completion
/// carrying anything but the newest ticket is discarded, never merged.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    latest: Option<Snapshot>,
    last_ticket: u64,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; the returned ticket must be handed back to
    /// [`complete`](Self::complete).
    pub fn begin_fetch(&mut self) -> u64 {
        self.last_ticket += 1;
        self.last_ticket
    }

    /// Install a finished fetch. Returns `false` (and drops the snapshot)
    /// when a newer fetch has begun since `ticket` was issued.
    pub fn complete(&mut self, ticket: u64, mut snapshot: Snapshot) -> bool {
        if ticket < self.last_ticket {
            tracing::debug!(
                "Discarding stale snapshot (ticket {ticket}, newest {})",
                self.last_ticket
            );
            return false;
        }
        snapshot.seq = ticket;
        self.latest = Some(snapshot);
        true
    }

    /// The most recent completed snapshot, if any.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }
}
