// Error types shared by every pattern module.

use thiserror::Error;

/// Failure modes a pattern can report instead of panicking.
///
/// Every error is local to the operation that produced it; none of them are
/// transient, so nothing in the crate retries.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PatternError {
    #[error("no handler in the chain accepted request '{request}'")]
    Unhandled { request: String },

    #[error("no more elements")]
    Exhausted,

    #[error("invalid history index {index} (history holds {len} snapshots)")]
    InvalidHistoryIndex { index: usize, len: usize },

    #[error("{component} used before it was configured")]
    NotConfigured { component: &'static str },

    #[error("clone failed: {reason}")]
    CloneFailed { reason: String },

    #[error("unknown {kind} '{name}'")]
    UnknownVariant { kind: &'static str, name: String },

    #[error("access to '{site}' denied: {reason}")]
    AccessDenied { site: String, reason: String },
}

impl PatternError {
    pub fn not_configured(component: &'static str) -> Self {
        Self::NotConfigured { component }
    }

    pub fn unknown_variant(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
