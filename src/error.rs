//! Error types for trick resolution.

use thiserror::Error;

/// Errors that can occur when resolving a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// No cards have been played.
    #[error("invalid trick: at least one card must be played")]
    Empty,
}
