//! Crate error types.
//!
//! Both variants are local, recoverable conditions signaled to the caller.
//! The core has no I/O, so no transient or retryable failures arise here.

use serde::{Deserialize, Serialize};

/// Error returned by the game engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Error {
    /// The position is outside 1-9 or the cell is already marked.
    #[display("invalid move: position {} is out of range or already marked", _0)]
    InvalidMove(u8),

    /// A history-driven strategy was queried before any round was recorded.
    #[display("strategy queried on an empty move history")]
    EmptyHistory,
}

impl std::error::Error for Error {}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
