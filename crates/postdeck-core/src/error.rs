//! Centralized error type for the PostDeck core crates.
//!
//! Per-record data problems (bad timestamp, unknown status) are *not* errors:
//! they are logged and the record is excluded from the affected view. Only
//! structural problems — a payload that is not a collection at all, or a
//! broken config file — surface as typed failures.

use thiserror::Error;

/// The primary error type for all postdeck-core operations.
#[derive(Error, Debug)]
pub enum PostdeckError {
    /// The posts/accounts payload is not the shape of a collection.
    /// Fatal to the whole computation; nothing is partially aggregated.
    #[error("structural payload error: {0}")]
    Structural(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for PostDeck logic.
pub type Result<T> = std::result::Result<T, PostdeckError>;
