use thiserror::Error;

use crate::index::SweepKey;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while building a layer or running a verification.
///
/// Every error is detected as early as possible and propagated to the
/// caller. The computation is deterministic, so nothing is retried and
/// no partial results are returned.
#[derive(Debug, Error)]
pub enum Error {
    /// A wire is not purely horizontal or purely vertical.
    #[error("wire {name:?}: {reason}")]
    Geometry { name: String, reason: &'static str },

    /// Two wires in the same layer share a name.
    #[error("wire name {0:?} is not unique")]
    DuplicateName(String),

    /// An equal key was already present in the range index. This is an
    /// internal invariant breach, not a recoverable condition.
    #[error("duplicate key in range index: {key:?}")]
    DuplicateKey { key: SweepKey },

    /// A delete did not find its key in the range index. Indicates a
    /// bug in event construction or key comparison.
    #[error("key not found in range index: {key:?}")]
    KeyNotFound { key: SweepKey },

    /// The verifier already produced its result; build a fresh one
    /// over the same layer to re-run.
    #[error("verifier already consumed")]
    AlreadyConsumed,

    /// Malformed record in the textual layout description.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
